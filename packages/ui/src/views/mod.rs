mod login;
pub use login::LoginView;

mod dashboard;
pub use dashboard::DashboardView;

mod home;
pub use home::HomeView;
