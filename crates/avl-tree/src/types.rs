//! Link trait shared by every node layout.
//!
//! Links are `Option<u32>` slot indices into an [`Arena`](crate::Arena), so
//! tree code takes the arena plus an index instead of holding references.

/// Binary tree links (`p`, `l`, `r`).
///
/// The parent link is a back-reference used for navigation only; the arena
/// owns every node.
pub trait Node {
    /// Parent slot, `None` at the origin.
    fn p(&self) -> Option<u32>;
    /// Left child slot.
    fn l(&self) -> Option<u32>;
    /// Right child slot.
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}
