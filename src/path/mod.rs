//! String path helpers: separators, assembly, expansion and path algebra.

pub mod algebra;
pub mod builder;
pub mod expand;
pub mod lang;
pub mod sep;

pub use algebra::{dirname, is_absolute, is_child, join, relative_to, to_absolute};
pub use builder::strjoin;
pub use expand::{expand, expand_with};
pub use lang::{lang_tag, lang_tag_from};
pub use sep::{DIR_SEP, is_dir_sep};
