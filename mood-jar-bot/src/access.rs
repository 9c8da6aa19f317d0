//! Who may talk to the bot, and with which rights.

/// Rights of a configured identity. Admin can do everything the recipient can.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Recipient,
}

impl Role {
    /// Whether this role may run something that requires `required`.
    pub fn allows(self, required: Role) -> bool {
        matches!((self, required), (Role::Admin, _) | (Role::Recipient, Role::Recipient))
    }
}

/// The two identities the bot answers to, fixed at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessConfig {
    pub admin_id: i64,
    pub recipient_id: i64,
}

impl AccessConfig {
    pub fn new(admin_id: i64, recipient_id: i64) -> Self {
        Self {
            admin_id,
            recipient_id,
        }
    }

    /// Role of `user_id`, or None for anyone else. Admin wins if both ids are the same.
    pub fn role_of(&self, user_id: i64) -> Option<Role> {
        if user_id == self.admin_id {
            Some(Role::Admin)
        } else if user_id == self.recipient_id {
            Some(Role::Recipient)
        } else {
            None
        }
    }
}
