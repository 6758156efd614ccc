//! Usage guide shown by the `/guide` command.
//!
//! Pages are plain data so the bot layer decides how to render them.

/// A titled block of text inside a guide page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuideField {
    pub name: &'static str,
    pub value: &'static str,
}

/// One embed worth of guide content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuidePage {
    pub title: &'static str,
    pub description: Option<&'static str>,
    pub fields: &'static [GuideField],
    pub image: Option<&'static str>,
    pub footer: &'static str,
}

pub const GUIDE_PAGES: &[GuidePage] = &[
    GuidePage {
        title: "🦀 Rust Hours Bot - Complete Guide",
        description: Some("Follow these steps to check any Rust player's hours and stats!"),
        fields: &[GuideField {
            name: "**Step 1: Google the Server** 🔍",
            value: "Search for your favorite Rust server on Google and click on the Battlemetrics link",
        }],
        image: Some("https://i.imgur.com/izsxoFA.png"),
        footer: "Step 1 of 6",
    },
    GuidePage {
        title: "**Step 2: Locate the Player** 👤",
        description: Some("Click on any player name in the server's player list"),
        fields: &[],
        image: Some("https://i.imgur.com/LqTOJMq.png"),
        footer: "Step 2 of 6",
    },
    GuidePage {
        title: "**Step 3: Copy the ID from URL** 📋",
        description: Some("Copy the number from the player's profile URL"),
        fields: &[
            GuideField {
                name: "Example URL:",
                value: "`https://www.battlemetrics.com/players/123456789`",
            },
            GuideField { name: "Copy this part:", value: "`123456789`" },
        ],
        image: Some("https://i.imgur.com/Yi3eW1O.png"),
        footer: "Step 3 of 6",
    },
    GuidePage {
        title: "**Step 4: Use the Command** 🤖",
        description: Some("Type the command in Discord with the player ID"),
        fields: &[
            GuideField { name: "Command Format:", value: "`/hours playerid:123456789`" },
            GuideField {
                name: "Example:",
                value: "If the URL was `battlemetrics.com/players/987654321`\nUse: `/hours playerid:987654321`",
            },
        ],
        image: Some("https://i.imgur.com/CkMocid.png"),
        footer: "Step 4 of 6",
    },
    GuidePage {
        title: "**Step 5: View Results** 📊",
        description: Some("The bot will show you detailed player statistics!"),
        fields: &[GuideField {
            name: "You'll get:",
            value: "• Player name\n• Total hours played\n• US, EU and aim training hours\n• Last seen date\n• Top 5 most-played servers\n• Link to their Battlemetrics profile",
        }],
        image: Some("https://i.imgur.com/M41TSMC.png"),
        footer: "Step 5 of 6",
    },
    GuidePage {
        title: "**Frequently Asked Questions** ❓",
        description: None,
        fields: &[
            GuideField {
                name: "🤖 Bot not responding?",
                value: "The bot may be starting up - wait 10-15 seconds and try again. This is normal when the bot has been idle.",
            },
            GuideField {
                name: "❌ \"Player not found\" error?",
                value: "• Double-check the player ID is correct\n• Make sure you copied only the numbers\n• Verify the player exists on Battlemetrics",
            },
            GuideField {
                name: "🔗 Invalid player ID format?",
                value: "Make sure you're only copying the numbers from the URL, not the entire link.",
            },
            GuideField {
                name: "📱 Commands available:",
                value: "`/ping` - Test if bot is working\n`/hours playerid:123456789` - Get player hours\n`/guide` - Show this guide",
            },
        ],
        image: None,
        footer: "Made with ❤️ for the Rust community | FAQ",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guide_has_steps_and_faq() {
        assert_eq!(GUIDE_PAGES.len(), 6);
        assert!(GUIDE_PAGES.last().unwrap().title.contains("Frequently Asked Questions"));
    }

    #[test]
    fn test_discord_embed_limits() {
        // Discord caps titles at 256 chars and field values at 1024
        for page in GUIDE_PAGES {
            assert!(page.title.chars().count() <= 256, "{}", page.title);
            assert!(page.fields.len() <= 25);
            for field in page.fields {
                assert!(field.name.chars().count() <= 256);
                assert!(field.value.chars().count() <= 1024);
            }
        }
    }
}
