use roomwalk_core::Direction;

/// What is known about one exit of a visited room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExitState<R> {
    /// The exit exists but the room behind it has not been reached through it.
    Unresolved,
    /// The exit is known to lead to this room.
    Resolved(R),
}

impl<R> ExitState<R> {
    pub fn is_unresolved(&self) -> bool {
        matches!(self, Self::Unresolved)
    }

    pub fn resolved(&self) -> Option<&R> {
        match self {
            Self::Resolved(room) => Some(room),
            Self::Unresolved => None,
        }
    }
}

/// Exits of one room, one slot per direction in canonical order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExitRecord<R> {
    slots: [Option<ExitState<R>>; 4],
}

impl<R> ExitRecord<R> {
    /// A record with every listed exit unresolved. Repeated directions collapse.
    pub fn unresolved(exits: impl IntoIterator<Item = Direction>) -> Self {
        let mut slots = [None, None, None, None];
        for direction in exits {
            slots[direction.index()] = Some(ExitState::Unresolved);
        }
        Self { slots }
    }

    pub fn get(&self, direction: Direction) -> Option<&ExitState<R>> {
        self.slots[direction.index()].as_ref()
    }

    pub(crate) fn get_mut(&mut self, direction: Direction) -> Option<&mut ExitState<R>> {
        self.slots[direction.index()].as_mut()
    }

    pub fn has_exit(&self, direction: Direction) -> bool {
        self.slots[direction.index()].is_some()
    }

    /// Number of exits, resolved or not.
    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn unresolved_count(&self) -> usize {
        self.slots
            .iter()
            .flatten()
            .filter(|state| state.is_unresolved())
            .count()
    }

    pub fn has_unresolved(&self) -> bool {
        self.slots
            .iter()
            .flatten()
            .any(|state| state.is_unresolved())
    }

    /// All exits in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, &ExitState<R>)> {
        Direction::ALL
            .into_iter()
            .filter_map(move |d| self.get(d).map(|state| (d, state)))
    }

    /// First direction in `priority` whose exit is unresolved.
    pub fn first_unresolved(&self, priority: &[Direction]) -> Option<Direction> {
        priority
            .iter()
            .copied()
            .find(|&d| self.get(d).is_some_and(ExitState::is_unresolved))
    }

    /// Resolved exits in `priority` order.
    pub fn resolved_in<'a>(
        &'a self,
        priority: &'a [Direction],
    ) -> impl Iterator<Item = (Direction, &'a R)> + 'a {
        priority
            .iter()
            .filter_map(move |&d| self.get(d).and_then(ExitState::resolved).map(|r| (d, r)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roomwalk_core::Direction::*;

    #[test]
    fn duplicate_exits_collapse() {
        let record: ExitRecord<u32> = ExitRecord::unresolved([North, North, West]);
        assert_eq!(record.len(), 2);
        assert_eq!(record.unresolved_count(), 2);
    }

    #[test]
    fn first_unresolved_follows_priority_not_insertion() {
        let record: ExitRecord<u32> = ExitRecord::unresolved([West, South, East]);
        assert_eq!(record.first_unresolved(&Direction::ALL), Some(East));
        assert_eq!(record.first_unresolved(&[West, North, East, South]), Some(West));
    }

    #[test]
    fn resolved_in_skips_open_and_missing_exits() {
        let mut record: ExitRecord<u32> = ExitRecord::unresolved([North, East, South]);
        *record.get_mut(South).unwrap() = ExitState::Resolved(7);
        *record.get_mut(North).unwrap() = ExitState::Resolved(3);
        let resolved: Vec<_> = record.resolved_in(&[South, West, North, East]).collect();
        assert_eq!(resolved, vec![(South, &7), (North, &3)]);
        assert!(record.has_unresolved());
    }

    #[test]
    fn iter_is_canonical() {
        let record: ExitRecord<u32> = ExitRecord::unresolved([West, North]);
        let dirs: Vec<_> = record.iter().map(|(d, _)| d).collect();
        assert_eq!(dirs, vec![North, West]);
    }
}
