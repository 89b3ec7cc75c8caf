mod artists;
mod shows;
mod venues;

pub use artists::ArtistRepository;
pub use shows::{NewShow, ShowRepository};
pub use venues::VenueRepository;

use sea_orm::sea_query::{Expr, Func, IntoColumnRef, LikeExpr, SimpleExpr};

/// Case-insensitive substring match on `column`. `%`, `_` and `\\` in the term
/// are matched literally.
///
/// The term is folded with Rust's Unicode `to_lowercase`, but the column is folded
/// by the backend's `lower()`. Postgres folds Unicode; SQLite folds ASCII only, so
/// there a non-ASCII uppercase letter in a stored name only matches a term that
/// spells it in lowercase.
pub(crate) fn name_matches<T: IntoColumnRef>(column: T, term: &str) -> SimpleExpr {
    let escaped = term
        .to_lowercase()
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");

    Expr::expr(Func::lower(Expr::col(column)))
        .like(LikeExpr::new(format!("%{}%", escaped)).escape('\\'))
}
