/// Membership tracking for users a traversal has already reached.
///
/// `set` reports whether the user was newly marked.
pub trait VisitorSet<U> {
    fn get(&self, user: &U) -> bool;
    fn set(&mut self, user: U) -> bool;
}
