mod nuxt;
mod project_name;
mod project_template;

pub use nuxt::{NuxtOpt, RenderingMode};
pub use project_name::{ProjectName, ProjectNameOpt};
pub use project_template::ProjectTemplateOpt;
