//! Reference (who can interact) settings of the draft.

use crate::models::{DegreesOfSeparationInput, ReferenceModuleInput, ReferenceModuleType};

#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceModuleStore {
    pub selected_reference_module: ReferenceModuleType,
    /// Gating is switched on
    pub only_followers: bool,
    pub degrees_of_separation: u8,
}

impl Default for ReferenceModuleStore {
    fn default() -> Self {
        Self {
            selected_reference_module: ReferenceModuleType::FollowerOnlyReferenceModule,
            only_followers: false,
            degrees_of_separation: 2,
        }
    }
}

impl ReferenceModuleStore {
    /// Restriction block for on-chain requests; `None` when ungated.
    pub fn input(&self) -> Option<ReferenceModuleInput> {
        if !self.only_followers {
            return None;
        }

        Some(match self.selected_reference_module {
            ReferenceModuleType::FollowerOnlyReferenceModule => {
                ReferenceModuleInput::FollowerOnlyReferenceModule(true)
            }
            ReferenceModuleType::DegreesOfSeparationReferenceModule => {
                ReferenceModuleInput::DegreesOfSeparationReferenceModule(DegreesOfSeparationInput {
                    comments_restricted: true,
                    degrees_of_separation: self.degrees_of_separation,
                    mirrors_restricted: true,
                    quotes_restricted: true,
                })
            }
        })
    }

    /// Degrees reported to analytics, only for the degrees module.
    pub fn reported_degrees(&self) -> Option<u8> {
        match self.selected_reference_module {
            ReferenceModuleType::DegreesOfSeparationReferenceModule => {
                Some(self.degrees_of_separation)
            }
            ReferenceModuleType::FollowerOnlyReferenceModule => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ungated_has_no_input() {
        assert!(ReferenceModuleStore::default().input().is_none());
    }

    #[test]
    fn test_followers_only() {
        let store = ReferenceModuleStore {
            only_followers: true,
            ..Default::default()
        };
        assert_eq!(
            store.input(),
            Some(ReferenceModuleInput::FollowerOnlyReferenceModule(true))
        );
        assert!(store.reported_degrees().is_none());
    }

    #[test]
    fn test_degrees_of_separation() {
        let store = ReferenceModuleStore {
            selected_reference_module: ReferenceModuleType::DegreesOfSeparationReferenceModule,
            only_followers: true,
            degrees_of_separation: 3,
        };
        match store.input() {
            Some(ReferenceModuleInput::DegreesOfSeparationReferenceModule(input)) => {
                assert_eq!(input.degrees_of_separation, 3);
                assert!(input.comments_restricted && input.mirrors_restricted);
            }
            other => panic!("unexpected input: {:?}", other),
        }
        assert_eq!(store.reported_degrees(), Some(3));
    }
}
