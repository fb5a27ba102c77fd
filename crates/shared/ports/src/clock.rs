use otc_core::Timestamp;

/// Time source for quote expiry checks
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}
