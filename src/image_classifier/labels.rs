use crate::image_classifier::error::ClassifyError;

#[derive(Debug, Clone, PartialEq)]
pub struct ClassLabelSet {
    labels: Vec<String>,
}

impl ClassLabelSet {
    pub fn new(labels: Vec<String>) -> Self {
        Self { labels }
    }

    /// Drops trailing labels the model does not predict. Unknown class count keeps the full set.
    pub fn truncated_to(mut self, num_classes: Option<usize>) -> Self {
        if let Some(num_classes) = num_classes {
            self.labels.truncate(num_classes);
        }
        self
    }

    pub fn label(&self, index: usize) -> Result<&str, ClassifyError> {
        self.labels
            .get(index)
            .map(String::as_str)
            .ok_or(ClassifyError::LabelMapping {
                index,
                available: self.labels.len(),
            })
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[cfg(test)]
    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }
}

/// Index of the highest score, lowest index on ties.
/// `None` for an empty vector or one containing NaN.
pub fn argmax(scores: &[f32]) -> Option<usize> {
    if scores.is_empty() || scores.iter().any(|score| score.is_nan()) {
        return None;
    }

    let mut best = 0;
    for (index, score) in scores.iter().enumerate().skip(1) {
        if *score > scores[best] {
            best = index;
        }
    }
    Some(best)
}
