mod modal;
pub use modal::ModalOverlay;

mod project_form;
pub use project_form::ProjectForm;

mod skill_form;
pub use skill_form::SkillForm;
