//! @ai:module:intent Pick the best architecture per metric and recommend one
//! @ai:module:layer application
//! @ai:module:public_api Analyzer, Analysis, CategoryWinner, Category
//! @ai:module:stateless true

use crate::model::ModelArch;
use crate::results::ResultsCollection;
use crate::stats::keys;
use std::fmt::Write as FmtWrite;

/// @ai:intent Metric categories compared across architectures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Dogs,
    Breeds,
    NotDogs,
    Match,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Dogs,
        Category::Breeds,
        Category::NotDogs,
        Category::Match,
    ];

    /// @ai:intent Metric key the category is judged on
    /// @ai:effects pure
    pub fn key(&self) -> &'static str {
        match self {
            Category::Dogs => keys::PCT_CORRECT_DOGS,
            Category::Breeds => keys::PCT_CORRECT_BREED,
            Category::NotDogs => keys::PCT_CORRECT_NOTDOGS,
            Category::Match => keys::PCT_MATCH,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Category::Dogs => "Best at identifying dogs",
            Category::Breeds => "Best at breed classification",
            Category::NotDogs => "Best at identifying non-dogs",
            Category::Match => "Best overall match rate",
        }
    }
}

/// @ai:intent Winning architecture and its value for one category
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryWinner {
    pub category: Category,
    pub model: ModelArch,
    pub value: f64,
}

/// @ai:intent Winners of all categories; the match-rate winner is the recommendation
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub winners: Vec<CategoryWinner>,
}

impl Analysis {
    pub fn winner(&self, category: Category) -> Option<&CategoryWinner> {
        self.winners.iter().find(|w| w.category == category)
    }

    /// @ai:intent Recommended architecture, equal to the best match rate
    /// @ai:effects pure
    pub fn recommended(&self) -> Option<ModelArch> {
        self.winner(Category::Match).map(|w| w.model)
    }

    /// @ai:intent Render the analysis section printed after the console table
    /// @ai:effects pure
    pub fn render(&self) -> String {
        let mut output = String::new();

        writeln!(output).unwrap();
        writeln!(output, "{}", "=".repeat(80)).unwrap();
        writeln!(output, "ANALYSIS").unwrap();
        writeln!(output, "{}", "=".repeat(80)).unwrap();

        for winner in &self.winners {
            writeln!(
                output,
                "{}: {} ({:.1}%)",
                winner.category.description(),
                winner.model.label(),
                winner.value
            )
            .unwrap();
        }

        if let Some(model) = self.recommended() {
            writeln!(output).unwrap();
            writeln!(output, "RECOMMENDED MODEL: {}", model.label()).unwrap();
        }

        output
    }
}

/// @ai:intent Compares run results across architectures
pub struct Analyzer;

impl Analyzer {
    /// @ai:intent Best model for a category; absent results count as zero
    /// @ai:post the first model in collection order wins ties
    /// @ai:effects pure
    pub fn best_for(results: &ResultsCollection, category: Category) -> Option<CategoryWinner> {
        let mut best: Option<CategoryWinner> = None;

        for (model, stats) in results.iter() {
            let value = stats.map(|s| s.value_or_zero(category.key())).unwrap_or(0.0);

            if best.map_or(true, |b| value > b.value) {
                best = Some(CategoryWinner {
                    category,
                    model,
                    value,
                });
            }
        }

        best
    }

    /// @ai:intent Winners for every category
    /// @ai:effects pure
    pub fn analyze(results: &ResultsCollection) -> Analysis {
        let winners = Category::ALL
            .iter()
            .filter_map(|&category| Self::best_for(results, category))
            .collect();

        Analysis { winners }
    }
}
