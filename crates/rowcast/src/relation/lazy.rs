use rowcast_core::Result;

use std::{fmt, sync::Arc};

type Loader<T> = Arc<dyn Fn() -> Result<Vec<T>> + Send + Sync>;

/// A list of related rows read from storage the first time it is accessed.
///
/// Once loaded, the list never queries again: every later read and mutation
/// acts on the loaded rows. A list that is still unloaded when its parent is
/// updated is left untouched in storage, while a loaded list (even an empty
/// one) replaces the stored children.
pub struct Lazy<T> {
    state: State<T>,
}

enum State<T> {
    Loaded(Vec<T>),
    Unloaded(Loader<T>),
}

impl<T> Lazy<T> {
    /// An empty, loaded list.
    pub fn new() -> Lazy<T> {
        Lazy {
            state: State::Loaded(vec![]),
        }
    }

    /// A list whose rows come from `loader` on first access.
    pub fn deferred(loader: impl Fn() -> Result<Vec<T>> + Send + Sync + 'static) -> Lazy<T> {
        Lazy {
            state: State::Unloaded(Arc::new(loader)),
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.state, State::Loaded(_))
    }

    /// Loads the rows if that has not happened yet.
    ///
    /// A failed load leaves the list unloaded.
    pub fn load(&mut self) -> Result<&mut Vec<T>> {
        if let State::Unloaded(loader) = &self.state {
            let rows = loader()?;
            self.state = State::Loaded(rows);
        }

        match &mut self.state {
            State::Loaded(rows) => Ok(rows),
            State::Unloaded(_) => unreachable!(),
        }
    }

    /// The rows, without loading them.
    pub fn loaded(&self) -> Option<&[T]> {
        match &self.state {
            State::Loaded(rows) => Some(rows),
            State::Unloaded(_) => None,
        }
    }

    pub fn loaded_mut(&mut self) -> Option<&mut Vec<T>> {
        match &mut self.state {
            State::Loaded(rows) => Some(rows),
            State::Unloaded(_) => None,
        }
    }

    pub fn len(&mut self) -> Result<usize> {
        Ok(self.load()?.len())
    }

    pub fn is_empty(&mut self) -> Result<bool> {
        Ok(self.load()?.is_empty())
    }

    pub fn get(&mut self, index: usize) -> Result<Option<&T>> {
        Ok(self.load()?.get(index))
    }

    pub fn get_mut(&mut self, index: usize) -> Result<Option<&mut T>> {
        Ok(self.load()?.get_mut(index))
    }

    pub fn iter(&mut self) -> Result<std::slice::Iter<'_, T>> {
        Ok(self.load()?.iter())
    }

    pub fn iter_mut(&mut self) -> Result<std::slice::IterMut<'_, T>> {
        Ok(self.load()?.iter_mut())
    }

    pub fn as_mut_slice(&mut self) -> Result<&mut [T]> {
        Ok(self.load()?.as_mut_slice())
    }

    pub fn push(&mut self, row: T) -> Result<()> {
        self.load()?.push(row);
        Ok(())
    }

    /// Removes the row at `index`, or returns `None` when out of range.
    pub fn remove(&mut self, index: usize) -> Result<Option<T>> {
        let rows = self.load()?;
        Ok((index < rows.len()).then(|| rows.remove(index)))
    }

    /// Empties the list. No rows are read since they would be discarded.
    pub fn clear(&mut self) {
        self.state = State::Loaded(vec![]);
    }

    pub fn into_vec(mut self) -> Result<Vec<T>> {
        self.load()?;
        match self.state {
            State::Loaded(rows) => Ok(rows),
            State::Unloaded(_) => unreachable!(),
        }
    }
}

impl<T: Clone> Lazy<T> {
    pub fn to_vec(&mut self) -> Result<Vec<T>> {
        Ok(self.load()?.clone())
    }
}

impl<T> Default for Lazy<T> {
    fn default() -> Self {
        Lazy::new()
    }
}

impl<T> From<Vec<T>> for Lazy<T> {
    fn from(rows: Vec<T>) -> Self {
        Lazy {
            state: State::Loaded(rows),
        }
    }
}

impl<T> FromIterator<T> for Lazy<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Lazy::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T: Clone> Clone for Lazy<T> {
    fn clone(&self) -> Self {
        let state = match &self.state {
            State::Loaded(rows) => State::Loaded(rows.clone()),
            State::Unloaded(loader) => State::Unloaded(loader.clone()),
        };
        Lazy { state }
    }
}

impl<T: fmt::Debug> fmt::Debug for Lazy<T> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            State::Loaded(rows) => fmt.debug_list().entries(rows).finish(),
            State::Unloaded(_) => fmt.write_str("Lazy(<unloaded>)"),
        }
    }
}
