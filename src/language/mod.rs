mod registry;

pub use registry::{
    CommentSyntax, DelimitedSyntax, Language, LanguageRegistry, VisualSyntax, file_extension,
};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
