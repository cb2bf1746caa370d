//! # Naive Bayes Multinomial
//!
//! Classificador generativo sobre vetores de contagem (aqui, pesos TF-IDF):
//!
//! ```text
//! log P(c)        = ln(N_c / N)
//! log P(t | c)    = ln(F_ct + α) − ln(Σ_t' (F_ct' + α))
//! log P(c | x)   ∝ log P(c) + Σ_t x_t · log P(t | c)
//! ```
//!
//! `F_ct` é a soma dos pesos do termo `t` nos documentos da classe `c`.
//! A suavização α evita log(0) para termos nunca vistos numa classe.

use serde::{Deserialize, Serialize};

use super::Topic;
use crate::error::ClassifierError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultinomialNb {
    alpha: f64,
    classes: Vec<Topic>,
    class_log_prior: Vec<f64>,
    feature_log_prob: Vec<Vec<f64>>,
}

impl MultinomialNb {
    pub fn new(alpha: f64) -> Self {
        Self {
            alpha,
            classes: Vec::new(),
            class_log_prior: Vec::new(),
            feature_log_prob: Vec::new(),
        }
    }

    pub fn classes(&self) -> &[Topic] {
        &self.classes
    }

    /// Ajusta o modelo. As classes são os tópicos presentes em `labels`, na ordem canônica.
    pub fn fit(&mut self, rows: &[Vec<f64>], labels: &[Topic]) -> Result<(), ClassifierError> {
        if rows.len() != labels.len() {
            return Err(ClassifierError::InvalidCorpus(format!(
                "{} documentos e {} rótulos",
                rows.len(),
                labels.len()
            )));
        }
        let n_features = rows.first().map(Vec::len).unwrap_or(0);
        if n_features == 0 {
            return Err(ClassifierError::EmptyVocabulary);
        }

        self.classes = Topic::ALL
            .into_iter()
            .filter(|t| labels.contains(t))
            .collect();

        let total = labels.len() as f64;
        self.class_log_prior.clear();
        self.feature_log_prob.clear();
        for class in &self.classes {
            let mut feature_count = vec![0.0; n_features];
            let mut docs = 0usize;
            for (row, label) in rows.iter().zip(labels) {
                if label != class {
                    continue;
                }
                docs += 1;
                for (acc, v) in feature_count.iter_mut().zip(row) {
                    *acc += v;
                }
            }
            let denom = (feature_count.iter().sum::<f64>() + self.alpha * n_features as f64).ln();
            self.class_log_prior.push((docs as f64 / total).ln());
            self.feature_log_prob
                .push(feature_count.iter().map(|fc| (fc + self.alpha).ln() - denom).collect());
        }
        Ok(())
    }

    /// Distribuição posterior sobre as classes, na ordem de [`Self::classes`].
    pub fn predict_proba(&self, row: &[f64]) -> Result<Vec<(Topic, f64)>, ClassifierError> {
        if self.classes.is_empty() {
            return Err(ClassifierError::NotTrained);
        }
        let joint: Vec<f64> = self
            .class_log_prior
            .iter()
            .zip(&self.feature_log_prob)
            .map(|(prior, flp)| prior + row.iter().zip(flp).map(|(x, w)| x * w).sum::<f64>())
            .collect();

        // log-sum-exp
        let max = joint.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let exps: Vec<f64> = joint.iter().map(|j| (j - max).exp()).collect();
        let z: f64 = exps.iter().sum();

        self.classes
            .iter()
            .zip(exps)
            .map(|(&topic, e)| {
                let p = e / z;
                if p.is_finite() {
                    Ok((topic, p))
                } else {
                    Err(ClassifierError::NonFiniteProbability(topic.label().to_string()))
                }
            })
            .collect()
    }
}
