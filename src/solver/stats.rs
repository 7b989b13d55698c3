use std::fmt;
use std::fmt::{Debug, Display, Formatter};

use separator::Separatable;

/// Per-depth counters of candidate states.
///
/// Created counts every state the transition function produced, unique
/// counts states that entered the frontier, duplicates counts states the
/// seen set rejected. The depth-first fallback only reports created
/// states - it keeps no seen set, so the other two have no meaning there.
#[derive(Clone, PartialEq, Eq)]
pub struct Stats {
    created_states: Vec<i32>,
    unique_states: Vec<i32>,
    duplicate_states: Vec<i32>,
}

impl Stats {
    pub(crate) fn new() -> Self {
        Stats {
            created_states: vec![],
            unique_states: vec![],
            duplicate_states: vec![],
        }
    }

    pub fn total_created(&self) -> i32 {
        self.created_states.iter().sum::<i32>()
    }

    pub fn total_unique(&self) -> i32 {
        self.unique_states.iter().sum::<i32>()
    }

    pub fn total_duplicates(&self) -> i32 {
        self.duplicate_states.iter().sum::<i32>()
    }

    pub(crate) fn add_created(&mut self, depth: usize) -> bool {
        Self::add(&mut self.created_states, depth)
    }

    pub(crate) fn add_unique(&mut self, depth: usize) -> bool {
        Self::add(&mut self.unique_states, depth)
    }

    pub(crate) fn add_duplicate(&mut self, depth: usize) -> bool {
        Self::add(&mut self.duplicate_states, depth)
    }

    fn add(counts: &mut Vec<i32>, depth: usize) -> bool {
        let mut new_depth = false;

        // while because some depths might be skipped
        while depth >= counts.len() {
            counts.push(0);
            new_depth = true;
        }
        counts[depth] += 1;
        new_depth
    }
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "created by depth: {:?}", self.created_states)?;
        writeln!(f, "unique by depth: {:?}", self.unique_states)?;
        writeln!(f, "duplicates by depth: {:?}", self.duplicate_states)?;
        writeln!(f, "total created: {}", self.total_created().separated_string())?;
        writeln!(f, "total unique: {}", self.total_unique().separated_string())?;
        writeln!(
            f,
            "total duplicates: {}",
            self.total_duplicates().separated_string()
        )
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "States created total: {}",
            self.total_created().separated_string()
        )?;
        writeln!(
            f,
            "Unique states enqueued total: {}",
            self.total_unique().separated_string()
        )?;
        writeln!(
            f,
            "Reached duplicates total: {}",
            self.total_duplicates().separated_string()
        )?;
        writeln!(f)?;

        writeln!(f, "{:<15}{:<15}{:<15}{:<15}", "Depth", "Created", "Unique", "Duplicates")?;
        // created_states is always the longest vec
        for depth in 0..self.created_states.len() {
            let unique = self.unique_states.get(depth).cloned().unwrap_or(0);
            let duplicates = self.duplicate_states.get(depth).cloned().unwrap_or(0);
            writeln!(
                f,
                "{:<15}{:<15}{:<15}{:<15}",
                format!("{}:", depth),
                self.created_states[depth].separated_string(),
                unique.separated_string(),
                duplicates.separated_string()
            )?;
        }
        Ok(())
    }
}
