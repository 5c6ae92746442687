//! Leaf directive trait.
//!
//! Leaf directives use double-colon syntax on a line of their own:
//! `::name[content]{attrs}`

use super::{DirectiveArgs, DirectiveContext, DirectiveOutput, HandlerError};

/// Handler for leaf directives: `::name[content]{attrs}`
///
/// Each page gets its own processor, so handlers only need `Send`.
///
/// # Example
///
/// ```
/// use docsite_directive::{
///     DirectiveArgs, DirectiveContext, DirectiveOutput, HandlerError, LeafDirective,
/// };
///
/// struct VersionBadge;
///
/// impl LeafDirective for VersionBadge {
///     fn name(&self) -> &str { "version" }
///
///     fn process(
///         &mut self,
///         _args: DirectiveArgs,
///         ctx: &DirectiveContext,
///     ) -> Result<DirectiveOutput, HandlerError> {
///         Ok(DirectiveOutput::markdown(format!("**v{}**", ctx.version())))
///     }
/// }
/// ```
pub trait LeafDirective: Send {
    /// Directive name matched against `::name[...]`.
    fn name(&self) -> &str;

    /// Process one occurrence of the directive.
    ///
    /// Returning an error aborts processing of the page.
    fn process(
        &mut self,
        args: DirectiveArgs,
        ctx: &DirectiveContext,
    ) -> Result<DirectiveOutput, HandlerError>;

    /// Non-fatal warnings collected while processing.
    fn warnings(&self) -> &[String] {
        &[]
    }
}
