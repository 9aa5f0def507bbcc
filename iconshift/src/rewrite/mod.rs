//! Text rewriting engine.
//!
//! A document is rewritten by a [`Pipeline`]: ordered [`RuleSet`]s of regex
//! substitutions, a structural [`Cleanup`] pass, and an optional
//! [`DeclarationInjector`]. Every change is applied through the
//! [`ByteRangeRewriter`].

mod cleanup;
mod inject;
mod pipeline;
mod rewriter;
mod rules;

pub use cleanup::{property_pattern, Cleanup};
pub use inject::DeclarationInjector;
pub use pipeline::Pipeline;
pub use rewriter::{ByteRangeRewriter, Edit, RewriteError};
pub use rules::{Rewrite, Rule, RuleError, RuleHit, RuleSet};
