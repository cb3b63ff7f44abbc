// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Random record generation for populating a record store.

use rand::Rng;
use thiserror::Error;
use uuid::Uuid;

use crate::records::Record;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("generate.alphabet must contain at least one character")]
    EmptyAlphabet,
}

/// Produces records with random values drawn from a fixed alphabet.
#[derive(Debug, Clone)]
pub struct RecordGenerator {
    length: usize,
    alphabet: Vec<char>,
}

impl RecordGenerator {
    pub fn new(length: usize, alphabet: &str) -> Result<Self, GenerateError> {
        let alphabet: Vec<char> = alphabet.chars().collect();
        if alphabet.is_empty() {
            return Err(GenerateError::EmptyAlphabet);
        }
        Ok(Self { length, alphabet })
    }

    /// Characters per generated value.
    pub fn length(&self) -> usize {
        self.length
    }

    /// A value of `length` characters, each drawn uniformly from the alphabet.
    pub fn random_string<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        (0..self.length).map(|_| self.alphabet[rng.gen_range(0..self.alphabet.len())]).collect()
    }

    /// A record with a fresh v4 id and a random value.
    pub fn record<R: Rng + ?Sized>(&self, rng: &mut R) -> Record {
        Record::new(Uuid::new_v4(), self.random_string(rng))
    }

    /// Generate `count` records.
    pub fn generate<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<Record> {
        (0..count).map(|_| self.record(rng)).collect()
    }
}

#[cfg(test)]
#[path = "generate_tests.rs"]
mod tests;
