use super::AppError;
use super::text_case::camel_case;

/// Build a task name from at least two segments in camel case.
///
/// `assemble`, `snapshot`, `pom` -> `assembleSnapshotPom`
pub fn task_name(first: &str, second: &str, other: &[&str]) -> Result<String, AppError> {
    camel_case(&camel_case(first, &[second])?, other)
}

/// Registry of named tasks, kept in registration order.
#[derive(Debug, Clone)]
pub struct TaskContainer<T> {
    tasks: Vec<(String, T)>,
}

impl<T> Default for TaskContainer<T> {
    fn default() -> Self {
        Self { tasks: Vec::new() }
    }
}

impl<T> TaskContainer<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `task` under the camel-cased name of the segments.
    pub fn create(&mut self, first: &str, second: &str, other: &[&str], task: T) -> Result<&T, AppError> {
        let name = task_name(first, second, other)?;
        if self.tasks.iter().any(|(existing, _)| *existing == name) {
            return Err(AppError::TaskExists(name));
        }
        self.tasks.push((name, task));
        let (_, task) = &self.tasks[self.tasks.len() - 1];
        Ok(task)
    }

    /// Locate a task by the camel-cased name of the segments.
    pub fn get_by_name(&self, first: &str, second: &str, other: &[&str]) -> Result<&T, AppError> {
        self.get(&task_name(first, second, other)?)
    }

    /// Locate a task by its full name.
    pub fn get(&self, name: &str) -> Result<&T, AppError> {
        self.tasks.iter().find(|(existing, _)| existing == name).map(|(_, task)| task).ok_or_else(
            || AppError::TaskNotFound {
                name: name.to_string(),
                available: self.names().collect::<Vec<_>>().join(", "),
            },
        )
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tasks.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.tasks.iter().map(|(name, task)| (name.as_str(), task))
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
