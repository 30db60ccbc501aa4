//! LDA training behind the [`TopicTrainer`] seam, with a collapsed Gibbs sampler.

use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, info};

use super::Corpus;
use crate::error::{Error, Result};

/// Trains a topic model over a corpus with a fixed topic count.
pub trait TopicTrainer: Send + Sync {
    fn train(&self, corpus: &Corpus, topics: usize) -> Result<TopicModel>;
}

/// Result of training.
#[derive(Debug, Clone)]
pub struct TopicModel {
    /// `phi[k][w]`: probability of vocabulary id `w` under topic `k`.
    pub phi: Vec<Vec<f64>>,
    /// `theta[m][k]`: topic mixture of document `m`. Empty when the trainer
    /// does not report it.
    pub theta: Vec<Vec<f64>>,
}

impl TopicModel {
    pub fn topic_count(&self) -> usize {
        self.phi.len()
    }

    /// Documents whose most probable topic is not the topic at their position,
    /// as `(document, dominant_topic)`.
    pub fn positional_drift(&self) -> Vec<(usize, usize)> {
        self.theta
            .iter()
            .enumerate()
            .filter_map(|(doc, mixture)| {
                let dominant = argmax(mixture)?;
                (dominant != doc).then_some((doc, dominant))
            })
            .collect()
    }
}

fn argmax(values: &[f64]) -> Option<usize> {
    values
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.total_cmp(b.1))
        .map(|(i, _)| i)
}

/// Sampler hyper-parameters.
#[derive(Debug, Clone)]
pub struct GibbsConfig {
    pub alpha: f64,
    pub beta: f64,
    pub iterations: usize,
    pub burn_in: usize,
    /// Iterations between accumulated samples after burn-in; 0 disables averaging.
    pub sample_lag: usize,
    pub seed: Option<u64>,
}

impl Default for GibbsConfig {
    fn default() -> Self {
        GibbsConfig {
            alpha: 2.0,
            beta: 0.5,
            iterations: 1000,
            burn_in: 100,
            sample_lag: 10,
            seed: None,
        }
    }
}

impl GibbsConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.alpha > 0.0 && self.beta > 0.0) {
            return Err(Error::invalid_config(format!(
                "dirichlet priors must be positive (alpha={}, beta={})",
                self.alpha, self.beta
            )));
        }
        if self.iterations == 0 {
            return Err(Error::invalid_config("sampler needs at least one iteration"));
        }
        Ok(())
    }
}

/// Collapsed Gibbs sampler for LDA.
#[derive(Debug, Clone, Default)]
pub struct GibbsSampler {
    config: GibbsConfig,
}

impl GibbsSampler {
    pub fn new(config: GibbsConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }
}

impl TopicTrainer for GibbsSampler {
    fn train(&self, corpus: &Corpus, topics: usize) -> Result<TopicModel> {
        if topics == 0 {
            return Err(Error::invalid_config("topic count must be positive"));
        }
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut state = SamplerState::init(corpus, topics, &self.config, &mut rng);
        info!(
            topics,
            vocabulary = corpus.vocabulary_size(),
            documents = corpus.document_count(),
            iterations = self.config.iterations,
            "training topic model"
        );
        for iteration in 0..self.config.iterations {
            state.sweep(&mut rng);
            if iteration > self.config.burn_in
                && self.config.sample_lag > 0
                && iteration % self.config.sample_lag == 0
            {
                state.accumulate();
            }
        }
        debug!(samples = state.samples, "sampling finished");
        Ok(state.into_model())
    }
}

/// Count tables of one sampling run.
struct SamplerState<'a> {
    documents: &'a [Vec<usize>],
    topics: usize,
    vocabulary: usize,
    alpha: f64,
    beta: f64,
    /// Topic assignment of every token.
    z: Vec<Vec<usize>>,
    /// `word_topic[w][k]`: tokens of word `w` assigned to topic `k`.
    word_topic: Vec<Vec<usize>>,
    /// `doc_topic[m][k]`: tokens of document `m` assigned to topic `k`.
    doc_topic: Vec<Vec<usize>>,
    topic_total: Vec<usize>,
    doc_total: Vec<usize>,
    phi_sum: Vec<Vec<f64>>,
    theta_sum: Vec<Vec<f64>>,
    samples: usize,
    weights: Vec<f64>,
}

impl<'a> SamplerState<'a> {
    fn init(corpus: &'a Corpus, topics: usize, config: &GibbsConfig, rng: &mut StdRng) -> Self {
        let documents = corpus.documents();
        let vocabulary = corpus.vocabulary_size();
        let mut word_topic = vec![vec![0; topics]; vocabulary];
        let mut doc_topic = vec![vec![0; topics]; documents.len()];
        let mut topic_total = vec![0; topics];
        let mut doc_total = vec![0; documents.len()];
        let mut z = Vec::with_capacity(documents.len());
        for (m, doc) in documents.iter().enumerate() {
            let assignments: Vec<usize> = doc
                .iter()
                .map(|&w| {
                    let k = rng.gen_range(0..topics);
                    word_topic[w][k] += 1;
                    doc_topic[m][k] += 1;
                    topic_total[k] += 1;
                    k
                })
                .collect();
            doc_total[m] = doc.len();
            z.push(assignments);
        }
        Self {
            documents,
            topics,
            vocabulary,
            alpha: config.alpha,
            beta: config.beta,
            z,
            word_topic,
            doc_topic,
            topic_total,
            doc_total,
            phi_sum: vec![vec![0.0; vocabulary]; topics],
            theta_sum: vec![vec![0.0; topics]; documents.len()],
            samples: 0,
            weights: vec![0.0; topics],
        }
    }

    fn sweep(&mut self, rng: &mut StdRng) {
        for m in 0..self.documents.len() {
            for n in 0..self.documents[m].len() {
                let k = self.resample(m, n, rng);
                self.z[m][n] = k;
            }
        }
    }

    /// Draw a new topic for token `n` of document `m` from its full conditional.
    fn resample(&mut self, m: usize, n: usize, rng: &mut StdRng) -> usize {
        let w = self.documents[m][n];
        let old = self.z[m][n];
        self.word_topic[w][old] -= 1;
        self.doc_topic[m][old] -= 1;
        self.topic_total[old] -= 1;
        self.doc_total[m] -= 1;

        let v_beta = self.vocabulary as f64 * self.beta;
        let k_alpha = self.topics as f64 * self.alpha;
        let mut cumulative = 0.0;
        for k in 0..self.topics {
            cumulative += (self.word_topic[w][k] as f64 + self.beta)
                / (self.topic_total[k] as f64 + v_beta)
                * (self.doc_topic[m][k] as f64 + self.alpha)
                / (self.doc_total[m] as f64 + k_alpha);
            self.weights[k] = cumulative;
        }
        let u = rng.gen::<f64>() * cumulative;
        let new = self
            .weights
            .iter()
            .position(|&bound| u < bound)
            .unwrap_or(self.topics - 1);

        self.word_topic[w][new] += 1;
        self.doc_topic[m][new] += 1;
        self.topic_total[new] += 1;
        self.doc_total[m] += 1;
        new
    }

    fn phi(&self, k: usize, w: usize) -> f64 {
        (self.word_topic[w][k] as f64 + self.beta)
            / (self.topic_total[k] as f64 + self.vocabulary as f64 * self.beta)
    }

    fn theta(&self, m: usize, k: usize) -> f64 {
        (self.doc_topic[m][k] as f64 + self.alpha)
            / (self.doc_total[m] as f64 + self.topics as f64 * self.alpha)
    }

    fn accumulate(&mut self) {
        for k in 0..self.topics {
            for w in 0..self.vocabulary {
                self.phi_sum[k][w] += self.phi(k, w);
            }
        }
        for m in 0..self.documents.len() {
            for k in 0..self.topics {
                self.theta_sum[m][k] += self.theta(m, k);
            }
        }
        self.samples += 1;
    }

    fn into_model(self) -> TopicModel {
        if self.samples > 0 {
            let n = self.samples as f64;
            let average = |rows: Vec<Vec<f64>>| -> Vec<Vec<f64>> {
                rows.into_iter()
                    .map(|row| row.into_iter().map(|v| v / n).collect())
                    .collect()
            };
            return TopicModel {
                phi: average(self.phi_sum),
                theta: average(self.theta_sum),
            };
        }
        TopicModel {
            phi: (0..self.topics)
                .map(|k| (0..self.vocabulary).map(|w| self.phi(k, w)).collect())
                .collect(),
            theta: (0..self.documents.len())
                .map(|m| (0..self.topics).map(|k| self.theta(m, k)).collect())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Corpus {
        let docs = vec![
            vec!["经济", "市场", "投资", "经济", "市场"],
            vec!["地震", "救援", "地震", "救援", "灾区"],
            vec!["比赛", "冠军", "比赛", "球队", "冠军"],
        ];
        Corpus::from_documents(&docs).unwrap()
    }

    fn sampler(seed: u64) -> GibbsSampler {
        GibbsSampler::new(GibbsConfig {
            iterations: 200,
            burn_in: 20,
            sample_lag: 5,
            seed: Some(seed),
            ..GibbsConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn phi_rows_are_distributions() {
        let corpus = corpus();
        let model = sampler(7).train(&corpus, 3).unwrap();
        assert_eq!(model.topic_count(), 3);
        for row in &model.phi {
            assert_eq!(row.len(), corpus.vocabulary_size());
            let total: f64 = row.iter().sum();
            assert!((total - 1.0).abs() < 1e-9, "row sums to {total}");
        }
        assert_eq!(model.theta.len(), 3);
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let corpus = corpus();
        let a = sampler(42).train(&corpus, 3).unwrap();
        let b = sampler(42).train(&corpus, 3).unwrap();
        assert_eq!(a.phi, b.phi);
    }

    #[test]
    fn unaveraged_estimate_when_lag_is_zero() {
        let corpus = corpus();
        let trainer = GibbsSampler::new(GibbsConfig {
            iterations: 5,
            sample_lag: 0,
            seed: Some(1),
            ..GibbsConfig::default()
        })
        .unwrap();
        let model = trainer.train(&corpus, 2).unwrap();
        for row in &model.phi {
            assert!((row.iter().sum::<f64>() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn invalid_priors_are_rejected() {
        let config = GibbsConfig {
            beta: 0.0,
            ..GibbsConfig::default()
        };
        assert!(GibbsSampler::new(config).is_err());
    }
}
