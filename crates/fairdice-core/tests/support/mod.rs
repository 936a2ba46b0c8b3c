//! Scripted stand-ins for the terminal and the entropy source.

#![allow(dead_code)]

use fairdice_core::crypto::KEY_LEN;
use fairdice_core::{
    Cancelled, Choice, GameConsole, HmacDigest, ProbabilityMatrix, RandomSource, SecretKey,
};
use std::collections::VecDeque;
use std::num::NonZeroUsize;

/// Plays back a fixed list of engine draws
pub struct ScriptedRandom {
    values: VecDeque<usize>,
    keys_issued: u8,
}

impl ScriptedRandom {
    pub fn new(values: &[usize]) -> Self {
        Self {
            values: values.iter().copied().collect(),
            keys_issued: 0,
        }
    }

    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn next_in_range(&mut self, range: NonZeroUsize) -> usize {
        let value = self.values.pop_front().expect("random script exhausted");
        assert!(value < range.get(), "scripted {} outside 0..{}", value, range);
        value
    }

    fn fill_key(&mut self, key: &mut [u8; KEY_LEN]) {
        self.keys_issued = self.keys_issued.wrapping_add(1);
        key.fill(self.keys_issued);
    }
}

/// Console events, in the order the game produced them
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    Prompt {
        prompt: String,
        options: Vec<String>,
        help_available: bool,
    },
    Confirm(String),
    Message(String),
    Digest(HmacDigest),
    Reveal {
        key: SecretKey,
        value: usize,
        label: String,
    },
    Table(Vec<String>),
}

pub struct ScriptedConsole {
    choices: VecDeque<Choice>,
    confirms: VecDeque<bool>,
    pub events: Vec<Event>,
    pub last_matrix: Option<ProbabilityMatrix>,
}

impl ScriptedConsole {
    pub fn new(choices: &[Choice]) -> Self {
        Self {
            choices: choices.iter().copied().collect(),
            confirms: VecDeque::new(),
            events: Vec::new(),
            last_matrix: None,
        }
    }

    pub fn with_confirms(mut self, confirms: &[bool]) -> Self {
        self.confirms = confirms.iter().copied().collect();
        self
    }

    pub fn messages(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Message(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn has_message(&self, needle: &str) -> bool {
        self.messages().iter().any(|m| m.contains(needle))
    }

    pub fn digests(&self) -> Vec<HmacDigest> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Digest(d) => Some(*d),
                _ => None,
            })
            .collect()
    }

    pub fn prompts(&self) -> Vec<(&str, bool)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Prompt {
                    prompt,
                    help_available,
                    ..
                } => Some((prompt.as_str(), *help_available)),
                _ => None,
            })
            .collect()
    }

    pub fn table_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, Event::Table(_)))
            .count()
    }
}

impl GameConsole for ScriptedConsole {
    fn prompt_choice(&mut self, prompt: &str, options: &[String], help_available: bool) -> Choice {
        self.events.push(Event::Prompt {
            prompt: prompt.to_string(),
            options: options.to_vec(),
            help_available,
        });
        self.choices.pop_front().unwrap_or(Choice::Interrupted)
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool, Cancelled> {
        self.events.push(Event::Confirm(prompt.to_string()));
        self.confirms.pop_front().ok_or(Cancelled::Interrupted)
    }

    fn show_message(&mut self, text: &str) {
        self.events.push(Event::Message(text.to_string()));
    }

    fn show_digest(&mut self, digest: &HmacDigest) {
        self.events.push(Event::Digest(*digest));
    }

    fn show_key_and_value(&mut self, key: &SecretKey, value: usize, label: &str) {
        self.events.push(Event::Reveal {
            key: key.clone(),
            value,
            label: label.to_string(),
        });
    }

    fn show_probability_table(&mut self, matrix: &ProbabilityMatrix, labels: &[String]) {
        self.last_matrix = Some(matrix.clone());
        self.events.push(Event::Table(labels.to_vec()));
    }
}
