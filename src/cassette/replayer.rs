//! Serves recorded interactions back in order.

use std::collections::{HashMap, VecDeque};

use serde::de::DeserializeOwned;

use super::format::{Cassette, Interaction};
use crate::error::PortError;

/// Replays interactions from a cassette, one queue per port/method pair.
pub struct CassetteReplayer {
    queues: HashMap<(String, String), VecDeque<Interaction>>,
}

impl CassetteReplayer {
    /// Index a loaded cassette, keeping only interactions for `port`.
    #[must_use]
    pub fn for_port(cassette: &Cassette, port: &str) -> Self {
        let mut queues: HashMap<(String, String), VecDeque<Interaction>> = HashMap::new();
        for interaction in cassette.interactions.iter().filter(|i| i.port == port) {
            queues
                .entry((interaction.port.clone(), interaction.method.clone()))
                .or_default()
                .push_back(interaction.clone());
        }
        Self { queues }
    }

    /// Take the next interaction for the given port and method.
    ///
    /// # Panics
    ///
    /// Panics if the cassette holds no further interactions for the pair,
    /// listing what is still available.
    pub fn next_interaction(&mut self, port: &str, method: &str) -> Interaction {
        let key = (port.to_string(), method.to_string());
        if let Some(interaction) = self.queues.get_mut(&key).and_then(VecDeque::pop_front) {
            return interaction;
        }
        let remaining: Vec<String> = self
            .queues
            .iter()
            .filter(|(_, queue)| !queue.is_empty())
            .map(|((p, m), queue)| format!("{p}::{m} x{}", queue.len()))
            .collect();
        panic!(
            "Cassette exhausted: no interaction left for port={port:?} method={method:?}. \
             Remaining: [{}]",
            remaining.join(", ")
        );
    }

    /// Take the next interaction and decode its `ok`/`err` output.
    ///
    /// # Errors
    ///
    /// Returns the recorded error message, or a decoding error if the
    /// recorded value does not fit `T`.
    pub fn next_result<T: DeserializeOwned>(
        &mut self,
        port: &str,
        method: &str,
    ) -> Result<T, PortError> {
        let output = self.next_interaction(port, method).output;
        if let Some(err) = output.get("err") {
            return Err(err.as_str().unwrap_or("unknown error").to_string().into());
        }
        let value = output.get("ok").cloned().unwrap_or(output);
        serde_json::from_value(value)
            .map_err(|e| format!("{port}::{method}: failed to deserialize: {e}").into())
    }
}
