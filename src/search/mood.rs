use crate::error::{Error, Result};
use crate::search::criteria::{FilterCriteria, MOOD_PAGE_SIZE};

/// One-click search shortcut mapped to a canned facet combination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Quick,
    Healthy,
    Comfort,
    Sweet,
    Spicy,
    Budget,
}

/// Canned facet combination for a mood
#[derive(Debug, Clone, Copy)]
pub struct MoodProfile {
    pub meal_type: &'static str,
    pub tags: &'static str,
    pub diet: Option<&'static str>,
}

/// The full mood vocabulary, in display order
pub const ALL_MOODS: &[Mood] = &[
    Mood::Quick,
    Mood::Healthy,
    Mood::Comfort,
    Mood::Sweet,
    Mood::Spicy,
    Mood::Budget,
];

impl Mood {
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "quick" => Ok(Mood::Quick),
            "healthy" => Ok(Mood::Healthy),
            "comfort" => Ok(Mood::Comfort),
            "sweet" => Ok(Mood::Sweet),
            "spicy" => Ok(Mood::Spicy),
            "budget" => Ok(Mood::Budget),
            other => Err(Error::UnknownMood(other.to_string())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Quick => "quick",
            Mood::Healthy => "healthy",
            Mood::Comfort => "comfort",
            Mood::Sweet => "sweet",
            Mood::Spicy => "spicy",
            Mood::Budget => "budget",
        }
    }

    /// Fixed facet combination for this mood; immutable process-wide
    pub fn profile(self) -> MoodProfile {
        match self {
            Mood::Quick => MoodProfile {
                meal_type: "main course",
                tags: "easy,quick",
                diet: None,
            },
            Mood::Healthy => MoodProfile {
                meal_type: "main course",
                tags: "healthy",
                diet: Some("vegetarian"),
            },
            Mood::Comfort => MoodProfile {
                meal_type: "main course",
                tags: "comfort",
                diet: None,
            },
            Mood::Sweet => MoodProfile {
                meal_type: "dessert",
                tags: "sweet",
                diet: None,
            },
            Mood::Spicy => MoodProfile {
                meal_type: "main course",
                tags: "spicy",
                diet: None,
            },
            Mood::Budget => MoodProfile {
                meal_type: "main course",
                tags: "cheap,budget",
                diet: None,
            },
        }
    }

    /// Expand the mood into a canonical filter record.
    ///
    /// The first comma-delimited tag becomes the free-text query term;
    /// everything else takes the search defaults with a 6-item page.
    pub fn expand(self) -> FilterCriteria {
        let profile = self.profile();
        let query = profile
            .tags
            .split(',')
            .next()
            .unwrap_or(profile.tags)
            .to_string();

        FilterCriteria {
            query,
            meal_type: profile.meal_type.to_string(),
            diet: profile.diet.unwrap_or_default().to_string(),
            number: MOOD_PAGE_SIZE,
            ..FilterCriteria::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expansion_is_deterministic() {
        for mood in ALL_MOODS {
            assert_eq!(mood.expand(), mood.expand());
        }
    }

    #[test]
    fn test_unknown_mood_is_rejected() {
        assert!(matches!(Mood::parse("angry"), Err(Error::UnknownMood(_))));
        assert!(Mood::parse("").is_err());
    }

    #[test]
    fn test_sweet_expands_to_dessert() {
        let criteria = Mood::Sweet.expand();
        assert_eq!(criteria.meal_type, "dessert");
        assert_eq!(criteria.query, "sweet");
        assert_eq!(criteria.number, MOOD_PAGE_SIZE);
        assert!(criteria.diet.is_empty());
    }

    #[test]
    fn test_first_tag_becomes_query() {
        // quick has a comma-delimited tag list; only the first term is used
        let criteria = Mood::Quick.expand();
        assert_eq!(criteria.query, "easy");

        let criteria = Mood::Budget.expand();
        assert_eq!(criteria.query, "cheap");
    }

    #[test]
    fn test_healthy_carries_a_diet() {
        let criteria = Mood::Healthy.expand();
        assert_eq!(criteria.diet, "vegetarian");
        assert_eq!(criteria.meal_type, "main course");
    }

    #[test]
    fn test_round_trip_names() {
        for mood in ALL_MOODS {
            assert_eq!(Mood::parse(mood.as_str()).unwrap(), *mood);
        }
    }
}
