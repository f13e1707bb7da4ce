mod scorer;

pub use scorer::ITextScorer;
