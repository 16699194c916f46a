use crate::config::GeneratorConfig;
use crate::data::filter::{FilterCriteria, filter};
use crate::data::generator::Generator;
use crate::data::model::Dataset;
use crate::data::present::{Presentation, present};
use crate::error::Result;

// ---------------------------------------------------------------------------
// Pipeline: generate once, filter + present per criteria change
// ---------------------------------------------------------------------------

/// Owns the generator and memoizes its dataset. The cache is keyed by the
/// generator config, so the same seed never triggers a second draw.
#[derive(Debug)]
pub struct Pipeline {
    generator: Generator,
    cached: Option<(GeneratorConfig, Dataset)>,
    generations: usize,
}

impl Pipeline {
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        Ok(Pipeline {
            generator: Generator::new(config)?,
            cached: None,
            generations: 0,
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        self.generator.config()
    }

    /// Swap the generator config. The cached dataset is dropped only when the
    /// config actually differs.
    pub fn reconfigure(&mut self, config: GeneratorConfig) -> Result<()> {
        if &config != self.generator.config() {
            self.generator = Generator::new(config)?;
        }
        Ok(())
    }

    /// The dataset for the current config, generating it on first use.
    pub fn dataset(&mut self) -> Result<&Dataset> {
        let entry = match self.cached.take() {
            Some((key, dataset)) if &key == self.generator.config() => {
                log::trace!("Reusing cached dataset (seed {})", key.seed);
                (key, dataset)
            }
            _ => {
                let dataset = self.generator.generate()?;
                self.generations += 1;
                (self.generator.config().clone(), dataset)
            }
        };
        let (_, dataset) = self.cached.insert(entry);
        Ok(dataset)
    }

    /// How many times the dataset has been generated.
    pub fn generations(&self) -> usize {
        self.generations
    }

    /// One full pass: cached dataset → filter → present.
    pub fn run(&mut self, criteria: &FilterCriteria) -> Result<Presentation> {
        let dataset = self.dataset()?;
        let view = filter(dataset, criteria)?;
        Ok(present(&view))
    }
}
