use std::fmt::{self, Display};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

/// The boilerplates a project can start from
#[derive(
    Clone, Copy, Debug, Deserialize, Serialize, Eq, PartialEq, Hash, ValueEnum, EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    Basic,
    Pwa,
    Graphql,
    Nuxt,
}

impl TemplateKind {
    /// The canonical key stored in `mevn.json`
    pub const fn key(&self) -> &'static str {
        match self {
            TemplateKind::Basic => "basic",
            TemplateKind::Pwa => "pwa",
            TemplateKind::Graphql => "graphql",
            TemplateKind::Nuxt => "nuxt",
        }
    }

    /// The label shown in the selection prompt
    pub const fn label(&self) -> &'static str {
        match self {
            TemplateKind::Basic => "basic",
            TemplateKind::Pwa => "pwa",
            TemplateKind::Graphql => "graphql",
            TemplateKind::Nuxt => "Nuxt-js",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        TEMPLATES
            .iter()
            .map(|template| template.kind)
            .find(|kind| kind.label() == label)
    }

    pub fn starter(&self) -> &'static StarterTemplate {
        match self {
            TemplateKind::Basic => &TEMPLATES[0],
            TemplateKind::Pwa => &TEMPLATES[1],
            TemplateKind::Graphql => &TEMPLATES[2],
            TemplateKind::Nuxt => &TEMPLATES[3],
        }
    }
}

impl Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarterTemplate {
    pub kind: TemplateKind,
    pub git_url: &'static str,
    pub description: &'static str,
}

/// Every boilerplate, in the order the selection prompt lists them
pub const TEMPLATES: [StarterTemplate; 4] = [
    StarterTemplate {
        kind: TemplateKind::Basic,
        git_url: "https://github.com/madlabsinc/mevn-boilerplate.git",
        description: "Express API with a Vue.js client",
    },
    StarterTemplate {
        kind: TemplateKind::Pwa,
        git_url: "https://github.com/madlabsinc/mevn-pwa-boilerplate.git",
        description: "The basic boilerplate with offline support",
    },
    StarterTemplate {
        kind: TemplateKind::Graphql,
        git_url: "https://github.com/madlabsinc/mevn-graphql-boilerplate.git",
        description: "Express GraphQL server with a Vue.js client",
    },
    StarterTemplate {
        kind: TemplateKind::Nuxt,
        git_url: "https://github.com/madlabsinc/mevn-nuxt-boilerplate.git",
        description: "Server rendered Nuxt.js client with an Express API",
    },
];
