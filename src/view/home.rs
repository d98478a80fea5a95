/// Home screen: username input plus the re-entry guard for lookups.
#[derive(Debug, Default, Clone)]
pub struct HomeState {
    pub input: String,
    pub loading: bool,
}

impl HomeState {
    /// Whether the search action is offered (non-empty input, nothing outstanding).
    pub fn can_search(&self) -> bool {
        !self.input.is_empty() && !self.loading
    }

    /// Start a lookup for the current input.
    ///
    /// Returns `None` while a previous lookup is outstanding. Blank input is still
    /// handed over so the lookup reports the validation failure.
    pub fn begin_search(&mut self) -> Option<String> {
        if self.loading {
            return None;
        }
        if !self.input.trim().is_empty() {
            self.loading = true;
        }
        Some(self.input.clone())
    }

    pub fn finish_search(&mut self) {
        self.loading = false;
    }

    pub fn push_char(&mut self, c: char) {
        if !self.loading {
            self.input.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        if !self.loading {
            self.input.pop();
        }
    }
}

#[cfg(test)]
#[path = "tests/home_tests.rs"]
mod tests;
