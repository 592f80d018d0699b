//! Message reveal sequencing and reveal button labels

/// Outcome of pressing the reveal button
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevealStep {
    /// Show `message`; the button now reads `label`
    Reveal {
        index: usize,
        message: String,
        label: String,
    },
    /// Every message has been shown
    Exhausted,
}

#[derive(Debug, Clone)]
pub struct RevealSequencer {
    messages: Vec<String>,
    initial_label: String,
    final_label: String,
    encouragements: Vec<String>,
    index: usize,
    label: String,
}

impl RevealSequencer {
    pub fn new(
        messages: Vec<String>,
        initial_label: String,
        final_label: String,
        encouragements: Vec<String>,
    ) -> Self {
        Self {
            messages,
            label: initial_label.clone(),
            initial_label,
            final_label,
            encouragements,
            index: 0,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Current reveal button label
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn trigger(&mut self) -> RevealStep {
        let Some(message) = self.messages.get(self.index).cloned() else {
            return RevealStep::Exhausted;
        };

        let index = self.index;
        self.index += 1;

        self.label = if self.index == self.messages.len() {
            self.final_label.clone()
        } else {
            (self.index - 1)
                .checked_rem(self.encouragements.len())
                .and_then(|i| self.encouragements.get(i))
                .unwrap_or(&self.final_label)
                .clone()
        };

        RevealStep::Reveal {
            index,
            message,
            label: self.label.clone(),
        }
    }

    pub fn reset(&mut self) {
        self.index = 0;
        self.label = self.initial_label.clone();
    }
}
