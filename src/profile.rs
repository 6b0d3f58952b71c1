use tracing::debug;

use crate::storage::{self, keys, KeyValueStore};

pub const SAVED_MESSAGE: &str = "Profile saved successfully! ✅";
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill all required fields! ❌";
pub const BIRTHDAY_MESSAGE: &str = "🎉 Happy Birthday! You got 50% OFF!";
pub const NO_BIRTHDAY_MESSAGE: &str = "🎂 Please set your birthday in profile to claim offer!";
pub const BIRTHDAY_POINTS: u32 = 50;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub food_preference: String,
    /// `YYYY-MM-DD`, as written by a date input.
    pub birthday: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    MissingFields,
}

impl SaveOutcome {
    pub fn message(self) -> &'static str {
        match self {
            SaveOutcome::Saved => SAVED_MESSAGE,
            SaveOutcome::MissingFields => MISSING_FIELDS_MESSAGE,
        }
    }
}

impl UserProfile {
    pub fn load(store: &impl KeyValueStore) -> Self {
        Self {
            name: storage::get_string(store, keys::USER_NAME).unwrap_or_default(),
            email: storage::get_string(store, keys::USER_EMAIL).unwrap_or_default(),
            food_preference: storage::get_string(store, keys::FOOD_PREFERENCE).unwrap_or_default(),
            birthday: storage::get_string(store, keys::USER_BIRTHDAY).filter(|s| !s.is_empty()),
        }
    }

    /// Persist the profile. Name and email are required; nothing is written
    /// when either is blank.
    pub fn save(&self, store: &impl KeyValueStore) -> storage::Result<SaveOutcome> {
        if self.name.is_empty() || self.email.is_empty() {
            return Ok(SaveOutcome::MissingFields);
        }
        store.set(keys::USER_NAME, &self.name)?;
        store.set(keys::USER_EMAIL, &self.email)?;
        store.set(keys::FOOD_PREFERENCE, &self.food_preference)?;
        if let Some(b) = &self.birthday {
            store.set(keys::USER_BIRTHDAY, b)?;
        }
        debug!("profile saved");
        Ok(SaveOutcome::Saved)
    }

    /// Month and day of the stored birthday, if it parses.
    pub fn birthday_month_day(&self) -> Option<(u32, u32)> {
        let raw = self.birthday.as_deref()?;
        let mut parts = raw.trim().splitn(3, '-');
        let _year: i32 = parts.next()?.parse().ok()?;
        let month: u32 = parts.next()?.parse().ok()?;
        let day: u32 = parts.next()?.get(..2)?.parse().ok()?;
        ((1..=12).contains(&month) && (1..=31).contains(&day)).then_some((month, day))
    }

    /// Whether today (`month`, `day`, 1-based) is the visitor's birthday.
    pub fn is_birthday(&self, month: u32, day: u32) -> bool {
        self.birthday_month_day() == Some((month, day))
    }

    /// Points to credit for the birthday offer today, with the message to show.
    pub fn birthday_offer(&self, month: u32, day: u32) -> (Option<u32>, &'static str) {
        if self.is_birthday(month, day) {
            (Some(BIRTHDAY_POINTS), BIRTHDAY_MESSAGE)
        } else {
            (None, NO_BIRTHDAY_MESSAGE)
        }
    }
}

/// The birthday offer as claimed from the page: only the saved birthday
/// counts, not whatever is typed into the form.
pub fn claim_birthday_offer(
    store: &impl KeyValueStore,
    month: u32,
    day: u32,
) -> (Option<u32>, &'static str) {
    UserProfile::load(store).birthday_offer(month, day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn save_requires_name_and_email() {
        let store = MemoryStore::new();
        let p = UserProfile {
            name: "Hina".into(),
            ..UserProfile::default()
        };
        assert_eq!(p.save(&store).unwrap(), SaveOutcome::MissingFields);
        assert!(store.is_empty());
    }

    #[test]
    fn saved_profile_loads_back() {
        let store = MemoryStore::new();
        let p = UserProfile {
            name: "Hina".into(),
            email: "hina@example.com".into(),
            food_preference: "spicy".into(),
            birthday: Some("1998-03-14".into()),
        };
        assert_eq!(p.save(&store).unwrap().message(), SAVED_MESSAGE);
        assert_eq!(UserProfile::load(&store), p);
    }

    #[test]
    fn birthday_matches_month_and_day_only() {
        let p = UserProfile {
            birthday: Some("1998-03-14".into()),
            ..UserProfile::default()
        };
        assert!(p.is_birthday(3, 14));
        assert!(!p.is_birthday(3, 15));
        assert!(!UserProfile::default().is_birthday(3, 14));

        assert_eq!(p.birthday_offer(3, 14), (Some(50), BIRTHDAY_MESSAGE));
        assert_eq!(p.birthday_offer(1, 1), (None, NO_BIRTHDAY_MESSAGE));
    }

    #[test]
    fn datetime_suffix_is_tolerated() {
        let p = UserProfile {
            birthday: Some("2001-12-05T00:00:00Z".into()),
            ..UserProfile::default()
        };
        assert_eq!(p.birthday_month_day(), Some((12, 5)));

        let bad = UserProfile {
            birthday: Some("next tuesday".into()),
            ..UserProfile::default()
        };
        assert_eq!(bad.birthday_month_day(), None);
    }

    #[test]
    fn claim_reads_the_saved_birthday() {
        let store = MemoryStore::new();
        let typed = UserProfile {
            name: "Ayesha".into(),
            email: "ayesha@example.com".into(),
            food_preference: String::new(),
            birthday: Some("1999-03-14".into()),
        };
        assert_eq!(claim_birthday_offer(&store, 3, 14), (None, NO_BIRTHDAY_MESSAGE));

        typed.save(&store).unwrap();
        assert_eq!(
            claim_birthday_offer(&store, 3, 14),
            (Some(BIRTHDAY_POINTS), BIRTHDAY_MESSAGE)
        );
    }
}
