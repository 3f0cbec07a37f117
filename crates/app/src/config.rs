use ui::ViewDefaults;

use crate::cli::ViewArgs;

/// Resolve viewer start-up values. Flags beat environment variables, which
/// beat built-in defaults; clap has already applied that precedence.
#[must_use]
pub fn view_defaults(args: ViewArgs) -> ViewDefaults {
    let question = args.question.filter(|q| !q.trim().is_empty());
    ViewDefaults {
        category: args.category,
        threshold: args.threshold,
        question,
    }
}
