//! The activity records and the ordered registry that owns them.
//! Everything here is synchronous; locking is left to `ActivityStore`.

use serde::{ser::SerializeMap, Deserialize, Serialize, Serializer};

use super::{StoreError, StoreResult};

// ###################################
// ->   STRUCTS
// ###################################
/// A single extracurricular activity and its roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// Participant emails in signup order.
    pub participants: Vec<String>,
}

/// Activities keyed by name, kept in insertion order.
/// Serializes as a JSON object so the seed order survives on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Activities(Vec<(String, Activity)>);

// ###################################
// ->   IMPLs
// ###################################
impl Activity {
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
        participants: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: participants.into_iter().map(Into::into).collect(),
        }
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants as usize
    }

    pub fn spots_left(&self) -> usize {
        (self.max_participants as usize).saturating_sub(self.participants.len())
    }
}

impl Activities {
    /// Inserts an activity, replacing any previous activity with the same name in place.
    pub fn insert(&mut self, name: impl Into<String>, activity: Activity) {
        let name = name.into();
        match self.0.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = activity,
            None => self.0.push((name, activity)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, a)| a)
    }

    fn get_mut(&mut self, name: &str) -> StoreResult<&mut Activity> {
        self.0
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, a)| a)
            .ok_or_else(|| StoreError::ActivityNotFound(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.0.iter().map(|(n, a)| (n.as_str(), a))
    }

    /// Appends `email` to the roster of `name`.
    /// A full activity is only rejected when `enforce_capacity` is set.
    pub fn signup(&mut self, name: &str, email: &str, enforce_capacity: bool) -> StoreResult<()> {
        let activity = self.get_mut(name)?;

        if activity.has_participant(email) {
            return Err(StoreError::AlreadySignedUp {
                activity: name.to_string(),
                email: email.to_string(),
            });
        }
        if enforce_capacity && activity.is_full() {
            return Err(StoreError::ActivityFull {
                activity: name.to_string(),
                capacity: activity.max_participants,
            });
        }

        activity.participants.push(email.to_string());
        Ok(())
    }

    /// Removes `email` from the roster of `name`, keeping the order of the others.
    pub fn unregister(&mut self, name: &str, email: &str) -> StoreResult<()> {
        let activity = self.get_mut(name)?;

        let idx = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or_else(|| StoreError::NotSignedUp {
                activity: name.to_string(),
                email: email.to_string(),
            })?;
        activity.participants.remove(idx);

        Ok(())
    }
}

impl<N: Into<String>> FromIterator<(N, Activity)> for Activities {
    fn from_iter<T: IntoIterator<Item = (N, Activity)>>(iter: T) -> Self {
        let mut activities = Activities::default();
        for (name, activity) in iter {
            activities.insert(name, activity);
        }
        activities
    }
}

impl Serialize for Activities {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, activity) in &self.0 {
            map.serialize_entry(name, activity)?;
        }
        map.end()
    }
}
