//! One template set for every view. A view is an ordered list of blocks
//! borrowed from the site content; the viewer decides how a block looks.

use crate::content::{
    CallToAction, ContactContent, FormLabels, Hero, Highlight, PracticeArea, Presence,
    SiteContent, Teaser,
};
use crate::view::ViewId;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Block<'a> {
    Hero {
        hero: &'a Hero,
        badge: &'a str,
        action: ViewId,
    },
    Banner(&'a str),
    Heading {
        subtitle: &'a str,
        title: &'a str,
        centered: bool,
    },
    Statement(&'a str),
    Paragraphs(&'a [String]),
    PracticeGrid {
        areas: &'a [PracticeArea],
        /// Where a card leads, if anywhere.
        action: Option<(&'a str, ViewId)>,
    },
    NavigateLink {
        label: &'a str,
        action: ViewId,
    },
    Teaser {
        teaser: &'a Teaser,
        action: ViewId,
    },
    Quote(&'a str),
    Presence(&'a Presence),
    Portrait {
        image_url: &'a str,
        badge: &'a str,
    },
    Highlights(&'a [Highlight]),
    ContactChannels(&'a ContactContent),
    ContactForm(&'a FormLabels),
    MessagingCallToAction(&'a CallToAction),
}

impl Block<'_> {
    /// View this block leads to when activated, if any.
    pub fn action(&self) -> Option<ViewId> {
        match self {
            Block::Hero { action, .. }
            | Block::NavigateLink { action, .. }
            | Block::Teaser { action, .. } => Some(*action),
            Block::PracticeGrid { action, .. } => action.map(|(_, view)| view),
            _ => None,
        }
    }
}

pub fn view_blocks(content: &SiteContent, view: ViewId) -> Vec<Block<'_>> {
    let mut blocks = match view {
        ViewId::Home => home_blocks(content),
        ViewId::About => about_blocks(content),
        ViewId::Expertise => expertise_blocks(content),
        ViewId::Profile => profile_blocks(content),
        ViewId::Contact => contact_blocks(content),
    };

    // Every view closes with the messaging call to action
    blocks.push(Block::MessagingCallToAction(&content.call_to_action));
    blocks
}

fn home_blocks(content: &SiteContent) -> Vec<Block<'_>> {
    let home = &content.home;

    vec![
        Block::Hero {
            hero: &home.hero,
            badge: &content.brand.registration,
            action: ViewId::Contact,
        },
        Block::Banner(&home.banner),
        Block::Heading {
            subtitle: &home.purpose.subtitle,
            title: &home.purpose.title,
            centered: true,
        },
        Block::Statement(&home.purpose.statement),
        Block::Heading {
            subtitle: &home.practice.subtitle,
            title: &home.practice.title,
            centered: false,
        },
        Block::NavigateLink {
            label: &home.practice.link,
            action: ViewId::Expertise,
        },
        Block::PracticeGrid {
            areas: &content.practice_areas,
            action: Some((&home.practice.card_link, ViewId::Expertise)),
        },
        Block::Teaser {
            teaser: &home.teaser,
            action: ViewId::Profile,
        },
        Block::Quote(&home.quote),
        Block::Presence(&home.presence),
    ]
}

fn about_blocks(content: &SiteContent) -> Vec<Block<'_>> {
    let about = &content.about;

    vec![
        Block::Heading {
            subtitle: &about.subtitle,
            title: &about.title,
            centered: false,
        },
        Block::Paragraphs(&about.paragraphs),
        Block::Highlights(&about.highlights),
        Block::Portrait {
            image_url: &about.image_url,
            badge: &content.brand.registration,
        },
    ]
}

fn expertise_blocks(content: &SiteContent) -> Vec<Block<'_>> {
    vec![
        Block::Heading {
            subtitle: &content.expertise.subtitle,
            title: &content.expertise.title,
            centered: false,
        },
        Block::PracticeGrid {
            areas: &content.practice_areas,
            action: None,
        },
    ]
}

fn profile_blocks(content: &SiteContent) -> Vec<Block<'_>> {
    let profile = &content.profile;

    vec![
        Block::Portrait {
            image_url: &profile.image_url,
            badge: &content.brand.registration,
        },
        Block::Heading {
            subtitle: &profile.subtitle,
            title: &profile.title,
            centered: false,
        },
        Block::Paragraphs(&profile.paragraphs),
        Block::Highlights(&profile.highlights),
    ]
}

fn contact_blocks(content: &SiteContent) -> Vec<Block<'_>> {
    let contact = &content.contact;

    vec![
        Block::Heading {
            subtitle: &contact.subtitle,
            title: &contact.title,
            centered: false,
        },
        Block::ContactChannels(contact),
        Block::ContactForm(&contact.form),
    ]
}
