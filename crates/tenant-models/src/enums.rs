//! String enums used across schemas

string_enum! {
    /// Role of a user inside an organization
    pub enum MemberRole {
        /// Full control, including billing and deletion
        Owner => "owner",
        /// Manages members and settings
        Admin => "admin",
        /// Regular member
        Member => "member",
        /// Read-only access
        Viewer => "viewer",
    }
}

string_enum! {
    /// Lifecycle state of a chat
    pub enum ChatStatus {
        /// Accepting new messages
        Active => "active",
        /// Read-only
        Archived => "archived",
    }
}

string_enum! {
    /// Author of a chat message
    pub enum MessageRole {
        /// System prompt
        System => "system",
        /// End user
        User => "user",
        /// Model output
        Assistant => "assistant",
        /// Tool call result
        Tool => "tool",
    }
}

string_enum! {
    /// Third-party provider a stored credential belongs to
    pub enum CredentialProvider {
        /// OpenAI
        OpenAi => "openai",
        /// Anthropic
        Anthropic => "anthropic",
        /// Amazon Web Services
        Aws => "aws",
        /// Google Cloud
        Gcp => "gcp",
        /// Microsoft Azure
        Azure => "azure",
    }
}

string_enum! {
    /// Billing plan of an organization
    pub enum SubscriptionPlan {
        /// Free tier
        Free => "free",
        /// Single-seat paid tier
        Pro => "pro",
        /// Multi-seat paid tier
        Team => "team",
        /// Contract tier
        Enterprise => "enterprise",
    }
}

string_enum! {
    /// Settlement state of an invoice
    pub enum InvoiceStatus {
        /// Not finalized yet
        Draft => "draft",
        /// Finalized and awaiting payment
        Open => "open",
        /// Settled
        Paid => "paid",
        /// Cancelled
        Void => "void",
        /// Written off
        Uncollectible => "uncollectible",
    }
}

string_enum! {
    /// Visualization used by a dashboard widget
    pub enum WidgetKind {
        /// Line chart over time
        Timeseries => "timeseries",
        /// Tabular result
        Table => "table",
        /// Single number
        Stat => "stat",
        /// Raw log lines
        Logs => "logs",
    }
}
