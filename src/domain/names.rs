// SPDX-License-Identifier: MIT OR Apache-2.0

//! Structured resource identifiers used as fallback targets by commands.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a group within an account.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupName {
    /// Group name; empty means "the account's default group".
    pub group: String,
    /// Account name; empty means "the user's default account".
    pub account: String,
}

/// Identifies a virtual machine within a group.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VirtualMachineName {
    /// Virtual machine name; empty until a command fills it in.
    pub virtual_machine: String,
    /// Group name.
    pub group: String,
    /// Account name.
    pub account: String,
}

impl GroupName {
    /// Creates a group name.
    pub fn new(group: impl Into<String>, account: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            account: account.into(),
        }
    }
}

impl VirtualMachineName {
    /// Returns the group this virtual machine belongs to.
    pub fn group_name(&self) -> GroupName {
        GroupName::new(self.group.clone(), self.account.clone())
    }
}

impl From<GroupName> for VirtualMachineName {
    fn from(group: GroupName) -> Self {
        Self {
            virtual_machine: String::new(),
            group: group.group,
            account: group.account,
        }
    }
}

impl fmt::Display for GroupName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.group, self.account)
    }
}

impl fmt::Display for VirtualMachineName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.virtual_machine, self.group, self.account)
    }
}
