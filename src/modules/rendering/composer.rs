use crate::core::Result;

use super::views::BaseView;
use super::FragmentRenderer;

/// Number of fragments in a composed document, in order: landlord block,
/// date block, tenant block, concepts block
pub const FRAGMENT_COUNT: usize = 4;

/// Concatenate the four rendered fragments and wrap them in the base
/// layout.
///
/// The base layout is a static shell without per-fragment placeholders;
/// position on the page is implied entirely by concatenation order, so
/// the order of `fragments` is load-bearing.
pub fn compose(
    renderer: &FragmentRenderer,
    fragments: &[String; FRAGMENT_COUNT],
) -> Result<String> {
    let body = fragments.join("\n");
    renderer.render_base(&BaseView { body })
}
