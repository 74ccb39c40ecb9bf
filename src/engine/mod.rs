pub mod antonym;
pub mod classifier;
pub mod config;
pub mod error;
pub mod glitcher;
pub mod lexicon;
pub mod negator;
pub mod pipeline;
pub mod token;

pub use antonym::{AntonymResolver, DatamuseResolver, NoAntonyms, ResolverError};
pub use classifier::{normalize, Classifier, LexiconClassifier};
pub use config::Config;
pub use error::ContrarianError;
pub use glitcher::Glitcher;
pub use negator::{negate, negate_with_rule, NegationRule};
pub use pipeline::{Mutation, NegationCounter, Pipeline, RenderReport, Stage};
pub use token::{Token, TokenKind};
