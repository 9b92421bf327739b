//! Static boilerplate sections appended to every report.
//!
//! The bodies describe an external system, not this tool, and are
//! reproduced byte-for-byte for output compatibility.

/// A titled block written into the report behind a horizontal rule.
pub struct Section {
    pub title: &'static str,
    pub body: &'static str,
}

pub const ENVIRONMENT_VARIABLES: &str = "
Required:
- SUPABASE_URL: Supabase project URL
- SUPABASE_KEY: Service role key for admin operations
";

pub const DATABASE_TABLES: &str = "
Main tables:
1. auth.users (managed by Supabase)
2. users_tenants (mapping table)
3. tenants (tenant information)
";

pub const AUTHENTICATION_FLOW: &str = "
1. User signup → Create auth user → Create tenant mapping
2. Email verification required
3. Login → Receive JWT → Use token for authenticated requests
";

pub const IMPORTANT_NOTES: &str = "
- Using service_role key for admin operations
- Email verification required by default
- RLS policies must be properly configured
- Tenant isolation through RLS policies
";

/// The four fixed sections, in report order.
pub const BOILERPLATE: [Section; 4] = [
    Section {
        title: "# Environment Variables",
        body: ENVIRONMENT_VARIABLES,
    },
    Section {
        title: "# Database Tables",
        body: DATABASE_TABLES,
    },
    Section {
        title: "# Authentication Flow",
        body: AUTHENTICATION_FLOW,
    },
    Section {
        title: "# Important Notes",
        body: IMPORTANT_NOTES,
    },
];
