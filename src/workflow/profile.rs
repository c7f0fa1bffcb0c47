use super::error::{ValidationError, WorkflowResult, MIN_PASSWORD_LEN};
use super::forms::{PasswordForm, ProfileForm};
use super::Controller;
use crate::gateway::{ChangePasswordRequest, UpdateProfileRequest};

impl Controller {
    pub async fn update_profile(&self, form: &ProfileForm) -> WorkflowResult<()> {
        const ACTION: &str = "Failed to update profile";
        self.store.clear_notice();

        let name = form.name.trim();
        if name.is_empty() {
            return Err(self.report(ACTION, ValidationError::EmptyName.into()));
        }

        let request = UpdateProfileRequest {
            name: name.to_string(),
            phone: form.phone.trim().to_string(),
        };
        if let Err(e) = self.gateway.update_profile(&request).await {
            return Err(self.report(ACTION, e.into()));
        }

        self.succeed("Profile updated successfully");
        self.refresh_profile().await;
        Ok(())
    }

    /// Change the password. All checks run before anything is sent.
    pub async fn change_password(&self, form: &PasswordForm) -> WorkflowResult<()> {
        const ACTION: &str = "Failed to change password";
        self.store.clear_notice();

        if let Err(e) = check_password(form) {
            return Err(self.report(ACTION, e.into()));
        }

        let request = ChangePasswordRequest {
            current_password: form.current.clone(),
            new_password: form.new.clone(),
        };
        if let Err(e) = self.gateway.change_password(&request).await {
            return Err(self.report(ACTION, e.into()));
        }

        self.succeed("Password changed successfully");
        Ok(())
    }
}

fn check_password(form: &PasswordForm) -> Result<(), ValidationError> {
    if form.current.is_empty() || form.new.is_empty() || form.confirm.is_empty() {
        return Err(ValidationError::MissingPasswordFields);
    }
    if form.new != form.confirm {
        return Err(ValidationError::PasswordMismatch);
    }
    if form.new.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(current: &str, new: &str, confirm: &str) -> PasswordForm {
        PasswordForm {
            current: current.to_string(),
            new: new.to_string(),
            confirm: confirm.to_string(),
        }
    }

    #[test]
    fn test_password_check_order() {
        // Missing fields win over mismatch and length
        assert_eq!(
            check_password(&form("", "abc", "xyz")),
            Err(ValidationError::MissingPasswordFields)
        );
        // Mismatch wins over length
        assert_eq!(
            check_password(&form("old", "abc", "xyz")),
            Err(ValidationError::PasswordMismatch)
        );
        assert_eq!(
            check_password(&form("old", "abc", "abc")),
            Err(ValidationError::PasswordTooShort)
        );
        assert_eq!(check_password(&form("old", "secret1", "secret1")), Ok(()));
    }

    #[test]
    fn test_password_length_counts_characters() {
        assert_eq!(check_password(&form("old", "৳৳৳৳৳৳", "৳৳৳৳৳৳")), Ok(()));
    }
}
