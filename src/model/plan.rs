use super::task::Task;

/// The ordered task list plus the single selection, owned as one state
/// object so every mutation path goes through methods that keep the
/// selection valid.
///
/// Task identity is positional: a task *is* its current index, and removing
/// a task shifts every later index down by one. Anything that holds an index
/// across a removal must revalidate it.
#[derive(Debug, Clone, Default)]
pub struct Plan {
    tasks: Vec<Task>,
    selected: Option<usize>,
}

impl Plan {
    pub fn new(tasks: Vec<Task>) -> Self {
        Plan {
            tasks,
            selected: None,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Task> {
        self.tasks.get_mut(index)
    }

    pub(crate) fn push(&mut self, task: Task) {
        self.tasks.push(task);
    }

    pub(crate) fn remove(&mut self, index: usize) -> Task {
        self.tasks.remove(index)
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Select a row, wrapping one-past-the-end to the first row and
    /// one-before-the-start to the last (cyclic arrow-key navigation).
    /// Selecting in an empty plan clears the selection.
    pub fn select(&mut self, index: isize) {
        if self.tasks.is_empty() {
            self.selected = None;
            return;
        }
        let last = self.tasks.len() as isize - 1;
        let index = if index < 0 {
            last
        } else if index > last {
            0
        } else {
            index
        };
        self.selected = Some(index as usize);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Re-validate the selection after the list shrank. Unlike `select`,
    /// this clamps to the last valid row rather than wrapping.
    pub(crate) fn clamp_selection(&mut self) {
        match self.selected {
            Some(_) if self.tasks.is_empty() => self.selected = None,
            Some(i) if i >= self.tasks.len() => self.selected = Some(self.tasks.len() - 1),
            _ => {}
        }
    }
}
