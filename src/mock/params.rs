/// Shape of a mock network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockNetworkParams {
    pub users: usize,
    pub friendships: usize,
    /// `None` draws the generator state from the operating system.
    pub seed: Option<u64>,
}

impl MockNetworkParams {
    pub fn new(users: usize, friendships: usize, seed: Option<u64>) -> Self {
        Self {
            users,
            friendships,
            seed,
        }
    }
}

impl Default for MockNetworkParams {
    fn default() -> Self {
        Self::new(1000, 5000, None)
    }
}
