/// URL-keyed store of raw response bodies.
pub trait ResponseCache: Send + Sync {
    fn get(&self, key: &str) -> Option<Vec<u8>>;
    fn add(&self, key: &str, value: Vec<u8>);
}
