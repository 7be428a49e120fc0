/// Entity store owning the cycle, symptom and mood collections
///
/// The store is the single writer of all three collections. It is built
/// once at startup from whatever the persistence adapter can load, after
/// which records can only be appended. Every collection is ordered newest
/// added first, and every add writes the owning collection back to storage
/// before returning.

use chrono::NaiveDate;

use crate::domain::{
    self, Cycle, CycleInput, Mood, MoodInput, Symptom, SymptomInput,
};
use crate::storage::{PersistenceAdapter, Slot, SlotStorage};

/// Append-only store of tracker records
pub struct CycleStore<S: SlotStorage> {
    cycles: Vec<Cycle>,
    symptoms: Vec<Symptom>,
    moods: Vec<Mood>,
    persistence: PersistenceAdapter<S>,
}

impl<S: SlotStorage> CycleStore<S> {
    /// Build the store from the collections previously saved in `storage`
    pub fn load(storage: S) -> Self {
        let persistence = PersistenceAdapter::new(storage);
        let (cycles, symptoms, moods) = persistence.load();

        Self {
            cycles,
            symptoms,
            moods,
            persistence,
        }
    }

    /// Record a new cycle at the front of the history
    pub fn add_cycle(&mut self, input: CycleInput) -> Cycle {
        let cycle = Cycle::new(input);
        self.cycles.insert(0, cycle.clone());
        self.persistence.save(Slot::Cycles, &self.cycles);

        tracing::debug!("Added cycle {} starting {}", cycle.id, cycle.start_date);
        cycle
    }

    /// Record a new symptom at the front of the symptom log
    pub fn add_symptom(&mut self, input: SymptomInput) -> Symptom {
        let symptom = Symptom::new(input);
        self.symptoms.insert(0, symptom.clone());
        self.persistence.save(Slot::Symptoms, &self.symptoms);

        tracing::debug!("Added symptom {} ({}) on {}", symptom.id, symptom.kind.key(), symptom.date);
        symptom
    }

    /// Record a new mood at the front of the mood log
    pub fn add_mood(&mut self, input: MoodInput) -> Mood {
        let mood = Mood::new(input);
        self.moods.insert(0, mood.clone());
        self.persistence.save(Slot::Moods, &self.moods);

        tracing::debug!("Added mood {} ({}) on {}", mood.id, mood.mood.key(), mood.date);
        mood
    }

    /// Cycles, most recently added first
    pub fn cycles(&self) -> &[Cycle] {
        &self.cycles
    }

    /// Symptoms, most recently added first
    pub fn symptoms(&self) -> &[Symptom] {
        &self.symptoms
    }

    /// Moods, most recently added first
    pub fn moods(&self) -> &[Mood] {
        &self.moods
    }

    pub fn average_cycle_length(&self) -> i64 {
        domain::average_cycle_length(&self.cycles)
    }

    /// Days until the next predicted period, counted from today
    pub fn next_period_countdown(&self) -> Option<i64> {
        self.next_period_countdown_on(domain::today())
    }

    /// Days until the next predicted ovulation, counted from today
    pub fn next_ovulation_countdown(&self) -> Option<i64> {
        self.next_ovulation_countdown_on(domain::today())
    }

    pub fn next_period_countdown_on(&self, today: NaiveDate) -> Option<i64> {
        domain::next_period_countdown(&self.cycles, today)
    }

    pub fn next_ovulation_countdown_on(&self, today: NaiveDate) -> Option<i64> {
        domain::next_ovulation_countdown(&self.cycles, today)
    }

    /// Borrow the persistence adapter (useful for testing)
    pub fn persistence(&self) -> &PersistenceAdapter<S> {
        &self.persistence
    }
}
