use super::{CommandResult, CommandRunner};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

/// Runner with canned responses that records every command it is given.
///
/// Each command has a queue of results; the last one repeats once the queue
/// is down to a single entry. Unscripted commands fail. Clones share state,
/// so a test can keep a handle after boxing one into a session.
#[derive(Clone, Default)]
pub struct ScriptedRunner {
    responses: Arc<Mutex<HashMap<String, VecDeque<CommandResult>>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, command: &str, results: Vec<CommandResult>) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(command.to_string(), results.into());
        self
    }

    pub fn succeed(self, command: &str) -> Self {
        self.respond(command, vec![CommandResult::success("")])
    }

    pub fn fail(self, command: &str, stderr: &str) -> Self {
        self.respond(command, vec![CommandResult::failure(stderr)])
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, command: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| *c == command).count()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, command: &str) -> CommandResult {
        self.calls.lock().unwrap().push(command.to_string());

        let mut responses = self.responses.lock().unwrap();
        match responses.get_mut(command) {
            Some(queue) if queue.len() > 1 => queue.pop_front().unwrap_or_default(),
            Some(queue) => queue.front().cloned().unwrap_or_default(),
            None => CommandResult::failure(format!("{}: command not found", command)),
        }
    }
}
