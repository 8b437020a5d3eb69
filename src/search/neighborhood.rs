/// Read-only adjacency queries, the only view traversals have of a graph.
///
/// Any store that can hand out a user's neighbor list in a stable order can be
/// searched. Traversals never mutate through this trait, so one graph can be
/// shared by concurrent searches as long as nobody is inserting into it.
pub trait Neighborhood<U> {
    /// The neighbors of `user` in insertion order. Unknown users have none.
    ///
    /// The order is part of the contract: depth-first visiting order and
    /// which of several equally short paths gets returned both follow it.
    fn neighbors_of(&self, user: &U) -> &[U];
}
