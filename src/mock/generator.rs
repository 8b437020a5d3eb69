use rand::{SeedableRng, rngs::StdRng, seq::index::sample};

use crate::{mock::MockNetworkParams, network::SocialNetwork};

/// Display name of the `index`-th mock user.
pub fn user_name(index: usize) -> String {
    format!("User{index}")
}

/// The friendships of a mock network as pairs of user indices, in insertion
/// order. Each pair holds two distinct indices; the same pair may come up
/// more than once. Empty when there are fewer than two users.
pub fn friendship_pairs(
    params: &MockNetworkParams,
) -> impl ExactSizeIterator<Item = (usize, usize)> {
    let mut rng = match params.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let users = params.users;
    let count = if users >= 2 { params.friendships } else { 0 };

    (0..count).map(move |_| {
        let pair = sample(&mut rng, users, 2);
        (pair.index(0), pair.index(1))
    })
}

/// Registers every mock user, then adds the friendships of
/// [`friendship_pairs`].
///
/// # Examples
///
/// ```
/// use socialsearch::mock::{MockNetworkParams, populate};
///
/// let network = populate(&MockNetworkParams::new(10, 20, Some(7)));
/// assert_eq!(network.len(), 10);
/// assert_eq!(network.friendship_count(), 20);
/// ```
pub fn populate(params: &MockNetworkParams) -> SocialNetwork<String> {
    populate_from(params, friendship_pairs(params))
}

/// Registers every mock user, then adds one friendship per index pair.
///
/// Lets callers wrap [`friendship_pairs`] (in a progress bar, say) without
/// repeating the insertion loop. Pairs naming an index outside the user range
/// are dropped like any other unknown endpoint.
pub fn populate_from(
    params: &MockNetworkParams,
    pairs: impl IntoIterator<Item = (usize, usize)>,
) -> SocialNetwork<String> {
    let mut network = empty_network(params);
    for (a, b) in pairs {
        network.add_friendship(&user_name(a), &user_name(b));
    }
    network
}

/// A network holding every mock user and no friendships.
pub fn empty_network(params: &MockNetworkParams) -> SocialNetwork<String> {
    let mut network = SocialNetwork::new();
    for index in 0..params.users {
        network.add_user(user_name(index));
    }
    network
}
