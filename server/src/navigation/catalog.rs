//! Role and permission catalogues.
//!
//! The identifiers the built-in navigation tree is authored with. Tokens may
//! carry identifiers outside these lists; the filter treats them as opaque
//! strings.

/// Coarse-grained user role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Platform operator across all colleges
    SuperAdmin,
    /// Administrator of a single college
    CollegeAdmin,
    /// Teaching staff
    Teacher,
    /// Enrolled student
    Student,
    /// Library staff
    Librarian,
    /// Store and inventory staff
    StoreManager,
    /// Human resources staff
    HrManager,
}

impl Role {
    /// Identifier used in tokens and navigation rules.
    ///
    /// # Examples
    ///
    /// ```
    /// use erp_server::navigation::Role;
    ///
    /// assert_eq!(Role::CollegeAdmin.as_str(), "college_admin");
    /// ```
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SuperAdmin => "super_admin",
            Self::CollegeAdmin => "college_admin",
            Self::Teacher => "teacher",
            Self::Student => "student",
            Self::Librarian => "librarian",
            Self::StoreManager => "store_manager",
            Self::HrManager => "hr_manager",
        }
    }

    /// Returns all roles as a slice.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::SuperAdmin,
            Self::CollegeAdmin,
            Self::Teacher,
            Self::Student,
            Self::Librarian,
            Self::StoreManager,
            Self::HrManager,
        ]
    }

    /// Returns a human-readable description of the role.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::SuperAdmin => "Platform administrator",
            Self::CollegeAdmin => "College administrator",
            Self::Teacher => "Teaching staff",
            Self::Student => "Student",
            Self::Librarian => "Librarian",
            Self::StoreManager => "Store manager",
            Self::HrManager => "HR manager",
        }
    }

    /// Look up a role by its identifier.
    #[must_use]
    pub fn parse(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|role| role.as_str() == id)
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

/// Fine-grained capability granted on top of a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    /// Manage admissions and enrolment
    ManageAdmissions,
    /// Record attendance for a class
    MarkAttendance,
    /// View attendance reports
    ViewAttendanceReports,
    /// Enter examination marks
    EnterMarks,
    /// View examination results
    ViewResults,
    /// Generate printable report cards
    GenerateReportCards,
    /// Browse the library catalogue
    ViewLibrary,
    /// Issue and return library books
    IssueBooks,
    /// View store inventory
    ViewStore,
    /// Raise and approve purchase orders
    ManagePurchases,
    /// Issue stock to departments
    ManageStock,
    /// Publish announcements
    SendAnnouncements,
    /// View staff records
    ViewHr,
    /// View payroll
    ViewPayroll,
    /// Run payroll
    ProcessPayroll,
}

impl Permission {
    /// Identifier used in tokens and navigation rules.
    ///
    /// # Examples
    ///
    /// ```
    /// use erp_server::navigation::Permission;
    ///
    /// assert_eq!(Permission::ViewStore.as_str(), "view_store");
    /// ```
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ManageAdmissions => "manage_admissions",
            Self::MarkAttendance => "mark_attendance",
            Self::ViewAttendanceReports => "view_attendance_reports",
            Self::EnterMarks => "enter_marks",
            Self::ViewResults => "view_results",
            Self::GenerateReportCards => "generate_report_cards",
            Self::ViewLibrary => "view_library",
            Self::IssueBooks => "issue_books",
            Self::ViewStore => "view_store",
            Self::ManagePurchases => "manage_purchases",
            Self::ManageStock => "manage_stock",
            Self::SendAnnouncements => "send_announcements",
            Self::ViewHr => "view_hr",
            Self::ViewPayroll => "view_payroll",
            Self::ProcessPayroll => "process_payroll",
        }
    }

    /// Returns all permissions as a slice.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::ManageAdmissions,
            Self::MarkAttendance,
            Self::ViewAttendanceReports,
            Self::EnterMarks,
            Self::ViewResults,
            Self::GenerateReportCards,
            Self::ViewLibrary,
            Self::IssueBooks,
            Self::ViewStore,
            Self::ManagePurchases,
            Self::ManageStock,
            Self::SendAnnouncements,
            Self::ViewHr,
            Self::ViewPayroll,
            Self::ProcessPayroll,
        ]
    }

    /// Returns a human-readable description of the permission.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::ManageAdmissions => "Manage admissions and enrolment",
            Self::MarkAttendance => "Mark class attendance",
            Self::ViewAttendanceReports => "View attendance reports",
            Self::EnterMarks => "Enter examination marks",
            Self::ViewResults => "View examination results",
            Self::GenerateReportCards => "Generate report cards",
            Self::ViewLibrary => "Browse the library catalogue",
            Self::IssueBooks => "Issue and return books",
            Self::ViewStore => "View store inventory",
            Self::ManagePurchases => "Manage purchase orders",
            Self::ManageStock => "Issue stock to departments",
            Self::SendAnnouncements => "Publish announcements",
            Self::ViewHr => "View staff records",
            Self::ViewPayroll => "View payroll",
            Self::ProcessPayroll => "Run payroll",
        }
    }
}

impl From<Permission> for String {
    fn from(permission: Permission) -> Self {
        permission.as_str().to_string()
    }
}
