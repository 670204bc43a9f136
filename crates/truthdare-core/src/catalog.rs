//! Built-in packages, levels, and the seeded prompt catalog.
//!
//! These are the hard-coded defaults the store falls back to when a
//! persisted collection is missing or malformed, and the content every
//! fresh install starts with.

use once_cell::sync::Lazy;

use crate::content::{ContentKind, GameContent};
use crate::package::ContentPackage;
use crate::settings::GameLevel;

/// Id of the built-in package legacy rows fall back to.
pub const DEFAULT_PACKAGE_ID: &str = "default";
/// Id of the built-in road trip package.
pub const ROAD_TRIP_PACKAGE_ID: &str = "road-trip";
/// Id of the built-in camping package.
pub const CAMPING_PACKAGE_ID: &str = "camping";

/// The three built-in difficulty levels.
pub fn default_levels() -> Vec<GameLevel> {
    vec![
        GameLevel {
            id: 1,
            name: "Easy".to_string(),
            color: "#10B981".to_string(),
        },
        GameLevel {
            id: 2,
            name: "Medium".to_string(),
            color: "#F59E0B".to_string(),
        },
        GameLevel {
            id: 3,
            name: "Hard".to_string(),
            color: "#EF4444".to_string(),
        },
    ]
}

/// The three built-in, immutable packages present from first run.
pub fn default_packages() -> Vec<ContentPackage> {
    vec![
        builtin_package(
            DEFAULT_PACKAGE_ID,
            "Classic",
            "Traditional truth or dare questions for any occasion",
            "🎯",
            "#8B5CF6",
        ),
        builtin_package(
            ROAD_TRIP_PACKAGE_ID,
            "On the Road",
            "Perfect for family car trips and travel adventures",
            "🚗",
            "#3B82F6",
        ),
        builtin_package(
            CAMPING_PACKAGE_ID,
            "Camping Time",
            "Outdoor adventures and campfire fun",
            "🏕️",
            "#10B981",
        ),
    ]
}

fn builtin_package(id: &str, name: &str, description: &str, icon: &str, color: &str) -> ContentPackage {
    let mut package = ContentPackage::new(id, name, description, icon, color);
    package.is_default = true;
    package
}

/// The seeded prompt catalog every fresh install starts with.
pub fn builtin_content() -> Vec<GameContent> {
    BUILTIN_CONTENT.clone()
}

/// (kind, level, package, prompts) groups making up the built-in catalog.
type PromptGroup = (ContentKind, i32, &'static str, &'static [&'static str]);

static BUILTIN_CONTENT: Lazy<Vec<GameContent>> = Lazy::new(|| {
    let groups: &[PromptGroup] = &[
        (ContentKind::Truth, 1, DEFAULT_PACKAGE_ID, &[
            "What is your favorite color and why?",
            "What is your biggest fear?",
            "What is your favorite movie of all time?",
            "If you could have any superpower, what would it be?",
            "What is your dream job?",
            "What is your favorite food?",
            "What is your favorite season and why?",
            "If you could visit any country, where would you go?",
            "What is your favorite animal?",
            "What is your favorite hobby?",
        ]),
        (ContentKind::Dare, 1, DEFAULT_PACKAGE_ID, &[
            "Do 10 jumping jacks",
            "Sing your favorite song for 30 seconds",
            "Dance for 30 seconds",
            "Do your best animal impression",
            "Tell a joke that makes everyone laugh",
            "Do 5 push-ups",
            "Speak in an accent for the next 3 rounds",
            "Draw a picture with your eyes closed",
            "Do your best robot dance",
            "Sing \"Happy Birthday\" in a funny voice",
        ]),
        (ContentKind::Truth, 2, DEFAULT_PACKAGE_ID, &[
            "What is your most embarrassing moment?",
            "Who was your first crush?",
            "What is something you have never told your parents?",
            "What is your weirdest habit?",
            "What is the most trouble you have ever been in?",
            "What is your biggest insecurity?",
            "Have you ever cheated on a test or game?",
            "What is the meanest thing you have ever said to someone?",
            "What is your most irrational fear?",
            "Have you ever lied to get out of trouble?",
        ]),
        (ContentKind::Dare, 2, DEFAULT_PACKAGE_ID, &[
            "Call someone and sing them a song",
            "Let someone else style your hair however they want",
            "Eat a spoonful of a condiment",
            "Do 20 burpees",
            "Let someone draw on your face with washable markers",
            "Wear your clothes backwards for the next hour",
            "Do your best stand-up comedy routine for 2 minutes",
            "Let someone else choose your outfit for tomorrow",
            "Eat something without using your hands",
            "Do your best magic trick",
        ]),
        (ContentKind::Truth, 3, DEFAULT_PACKAGE_ID, &[
            "What is something you have never told anyone?",
            "What is your biggest regret?",
            "Who in this room would you date?",
            "What is the most illegal thing you have ever done?",
            "Have you ever been in love? If so, with whom?",
            "What is your deepest, darkest secret?",
            "Who do you have a crush on right now?",
            "Have you ever cheated in a relationship?",
            "What is something you have done that you would judge someone else for doing?",
            "Who in this room do you trust the least?",
        ]),
        (ContentKind::Dare, 3, DEFAULT_PACKAGE_ID, &[
            "Post an embarrassing photo on social media",
            "Let someone go through your phone for 1 minute",
            "Tell someone in this room how you really feel about them",
            "Let someone else read your last 5 text messages out loud",
            "Call a random number and try to have a 2-minute conversation",
            "Confess something to the group that you have never told anyone",
            "Eat something gross that the group chooses",
            "Let someone else choose a dare for you to do tomorrow",
            "Let someone else control your social media for the next hour",
            "Let someone write something embarrassing on your forehead in permanent marker",
        ]),
        (ContentKind::Truth, 1, ROAD_TRIP_PACKAGE_ID, &[
            "What is the weirdest thing you've seen on a road trip?",
            "What's your dream vacation destination?",
            "What's the longest you've ever been in a car?",
            "What's your favorite road trip snack?",
            "What's the best license plate you've ever seen?",
            "What's your favorite car game to play?",
            "What's the most beautiful place you've driven through?",
            "What's your favorite road trip memory?",
            "What's the worst traffic jam you've ever been in?",
            "What's your favorite type of music to listen to while driving?",
        ]),
        (ContentKind::Dare, 1, ROAD_TRIP_PACKAGE_ID, &[
            "Sing the alphabet backwards",
            "Make up a story about the next car you see",
            "Do your best impression of the GPS voice",
            "Count 20 red cars out loud",
            "Wave at 5 people in other cars",
            "Sing \"99 Bottles of Beer\" for 2 minutes",
            "Do the \"I'm a Little Teapot\" dance",
            "Make car sounds for 30 seconds",
            "Pretend to be a tour guide describing the scenery",
            "Do your best truck driver impression",
        ]),
        (ContentKind::Truth, 1, CAMPING_PACKAGE_ID, &[
            "What's the scariest thing about being in nature?",
            "What's your favorite camping activity?",
            "What's the best camping meal you've ever had?",
            "What's your favorite thing about sleeping outdoors?",
            "What's the most beautiful sunset you've seen while camping?",
            "What's your favorite campfire song?",
            "What's the coolest wildlife you've seen while camping?",
            "What's your favorite camping snack?",
            "What's the longest you've gone without a shower while camping?",
            "What's your favorite camping game?",
        ]),
        (ContentKind::Dare, 1, CAMPING_PACKAGE_ID, &[
            "Make the sound of your favorite animal for 10 seconds",
            "Pretend to set up a tent with your eyes closed",
            "Do your best bear impression",
            "Howl like a wolf for 15 seconds",
            "Pretend to start a campfire using only gestures",
            "Do your best impression of a park ranger",
            "Pretend to fish for 30 seconds",
            "Make up a nature documentary narration for 1 minute",
            "Do your best impression of a mosquito",
            "Pretend to roast marshmallows and describe the taste",
        ]),
        (ContentKind::Truth, 2, CAMPING_PACKAGE_ID, &[
            "Have you ever gotten lost in the woods?",
            "What's the scariest thing that's happened to you while camping?",
            "Have you ever had to use the bathroom in the woods?",
            "What's the grossest thing you've eaten while camping?",
            "Have you ever been caught in bad weather while camping?",
            "What's the most embarrassing thing that's happened to you while camping?",
            "Have you ever been afraid of the dark while camping?",
            "What's the worst camping equipment failure you've experienced?",
        ]),
        (ContentKind::Dare, 2, CAMPING_PACKAGE_ID, &[
            "Tell a spooky campfire story in 1 minute",
            "Eat something you find outside (safely)",
            "Sleep outside without a tent for one night",
            "Go 24 hours without using any technology",
            "Build a shelter using only natural materials",
            "Start a fire without matches or a lighter",
            "Go swimming in a natural body of water",
            "Hike barefoot for 10 minutes",
        ]),
        (ContentKind::Truth, 3, CAMPING_PACKAGE_ID, &[
            "What would you do if you saw a bear while camping?",
            "Have you ever been so scared while camping that you wanted to leave immediately?",
            "What's the most dangerous situation you've been in while outdoors?",
            "What's the most reckless thing you've done in nature?",
            "What's the most you've ever panicked while outdoors?",
            "Have you ever been completely lost and thought you might not make it back?",
        ]),
        (ContentKind::Dare, 3, CAMPING_PACKAGE_ID, &[
            "Sleep alone in the woods for one night",
            "Go camping for a week with only the clothes on your back",
            "Eat only what you can catch or forage for 3 days",
            "Go without any shelter for 2 nights",
            "Go swimming in freezing water",
            "Go without any map or navigation tools",
        ]),
    ];

    let mut rows = Vec::new();
    let mut next_id = 1u32;
    for (kind, level, package_id, texts) in groups {
        for text in *texts {
            rows.push(GameContent {
                id: next_id.to_string(),
                kind: *kind,
                text: (*text).to_string(),
                level: *level,
                package_id: (*package_id).to_string(),
            });
            next_id += 1;
        }
    }
    rows
});

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_builtin_content_ids_are_unique() {
        let rows = builtin_content();
        let ids: HashSet<_> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids.len(), rows.len());
    }

    #[test]
    fn test_builtin_content_references_builtin_packages() {
        let package_ids: HashSet<_> = default_packages().into_iter().map(|p| p.id).collect();
        for row in builtin_content() {
            assert!(package_ids.contains(&row.package_id), "{}", row.package_id);
        }
    }

    #[test]
    fn test_builtin_content_levels_match_default_levels() {
        let level_ids: HashSet<_> = default_levels().into_iter().map(|l| l.id).collect();
        for row in builtin_content() {
            assert!(level_ids.contains(&row.level));
        }
    }

    #[test]
    fn test_default_packages_are_immutable_builtins() {
        let packages = default_packages();
        assert_eq!(packages.len(), 3);
        assert!(packages.iter().all(|p| p.is_default));
        assert!(packages.iter().all(|p| !p.is_password_protected));
        assert_eq!(packages[0].id, DEFAULT_PACKAGE_ID);
    }

    #[test]
    fn test_every_builtin_package_has_easy_truths_and_dares() {
        let rows = builtin_content();
        for package in default_packages() {
            for kind in [ContentKind::Truth, ContentKind::Dare] {
                assert!(
                    rows.iter()
                        .any(|r| r.package_id == package.id && r.kind == kind && r.level == 1),
                    "missing {kind} rows for {}",
                    package.id
                );
            }
        }
    }
}
