//! Canonical sample orders written by `InitLedger`.

use swiftbc_types::PaymentOrder;

/// The two sample orders, in the order they are created.
pub fn sample_orders() -> [PaymentOrder; 2] {
    [
        PaymentOrder::new(
            "paymentOrder1",
            "20210121",
            "70000",
            "KRW",
            "테스트1",
            "서울어딘가",
            "orderer1",
            "010101010101",
            "receiver1",
            "미국어딘가",
            "원화를 보낸다",
            "재주껏 바꿔써라",
            "1",
        ),
        PaymentOrder::new(
            "paymentOrder2",
            "20210121",
            "100000",
            "KRW",
            "테스트2",
            "미국어딘가",
            "orderer2",
            "101010101010",
            "receiver2",
            "한국어딘가",
            "원화를 보낸다",
            "편하지?",
            "2",
        ),
    ]
}
