use clap::Subcommand;

use super::open_store;

#[derive(Subcommand)]
pub enum OnboardingAction {
    /// Mark onboarding as completed
    Complete,
    /// Print whether onboarding has been completed
    Status,
}

pub fn run(action: OnboardingAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        OnboardingAction::Complete => {
            let mut store = open_store()?;
            store.complete_onboarding();
            println!("Onboarding completed.");
        }
        OnboardingAction::Status => {
            let store = open_store()?;
            println!(
                "{}",
                if store.onboarding_complete() {
                    "completed"
                } else {
                    "pending"
                }
            );
        }
    }
    Ok(())
}
