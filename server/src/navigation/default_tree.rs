//! Built-in ERP sidebar.

use erp_common::{NavigationGroup, NavigationItem};

use super::catalog::{Permission, Role};

fn item(name: &str, target: &str, icon: &str) -> NavigationItem {
    NavigationItem::new(name, target, icon)
}

fn every_role() -> impl Iterator<Item = Role> {
    Role::all().iter().copied()
}

/// The navigation tree served when no `NAVIGATION_FILE` is configured.
///
/// Only the Help section is public; everything else needs a role or a
/// permission.
#[must_use]
pub fn default_tree() -> Vec<NavigationGroup> {
    use Permission as P;
    use Role as R;

    vec![
        NavigationGroup::new("Dashboard", "layout-dashboard")
            .roles(every_role())
            .items([item("Dashboard", "/dashboard", "layout-dashboard").roles(every_role())]),
        NavigationGroup::new("Core", "building-2")
            .roles([R::SuperAdmin, R::CollegeAdmin])
            .items([
                item("Colleges", "/colleges", "school").roles([R::SuperAdmin]),
                item("Departments", "/departments", "network")
                    .roles([R::SuperAdmin, R::CollegeAdmin]),
                item("Academic Years", "/academic-years", "calendar-range")
                    .roles([R::SuperAdmin, R::CollegeAdmin]),
                item("Users", "/users", "users").roles([R::SuperAdmin, R::CollegeAdmin]),
            ]),
        NavigationGroup::new("Students", "graduation-cap")
            .roles([R::SuperAdmin, R::CollegeAdmin, R::Teacher])
            .items([
                item("Student Records", "/students", "contact"),
                item("Admissions", "/students/admissions", "user-plus")
                    .roles([R::SuperAdmin, R::CollegeAdmin])
                    .any_permission([P::ManageAdmissions]),
                item("Promotions", "/students/promotions", "arrow-up-circle")
                    .roles([R::SuperAdmin, R::CollegeAdmin]),
            ]),
        NavigationGroup::new("Attendance", "calendar-check")
            .roles([R::SuperAdmin, R::CollegeAdmin, R::Teacher, R::Student])
            .items([
                item("Mark Attendance", "/attendance/mark", "check-square")
                    .any_permission([P::MarkAttendance]),
                item("My Attendance", "/attendance/me", "user-check").roles([R::Student]),
                item("Attendance Reports", "/attendance/reports", "bar-chart-3")
                    .roles([R::SuperAdmin, R::CollegeAdmin])
                    .any_permission([P::ViewAttendanceReports]),
            ]),
        NavigationGroup::new("Examinations", "file-text")
            .roles([R::SuperAdmin, R::CollegeAdmin, R::Teacher, R::Student])
            .items([
                item("Exam Schedule", "/exams/schedule", "calendar"),
                item("Marks Entry", "/exams/marks", "pencil").any_permission([P::EnterMarks]),
                item("Results", "/exams/results", "award")
                    .roles([R::Student])
                    .any_permission([P::ViewResults]),
                item("Report Cards", "/exams/report-cards", "printer")
                    .all_permissions([P::ViewResults, P::GenerateReportCards]),
            ]),
        NavigationGroup::new("Library", "library")
            .roles([
                R::SuperAdmin,
                R::CollegeAdmin,
                R::Librarian,
                R::Teacher,
                R::Student,
            ])
            .items([
                item("Catalogue", "/library/books", "book")
                    .roles([R::Librarian])
                    .any_permission([P::ViewLibrary]),
                item("Issue & Return", "/library/circulation", "repeat")
                    .all_permissions([P::ViewLibrary, P::IssueBooks]),
                item("My Borrowings", "/library/borrowings", "bookmark")
                    .roles([R::Student, R::Teacher]),
            ]),
        NavigationGroup::new("Store", "package").items([
            item("Inventory", "/store/inventory", "boxes").any_permission([P::ViewStore]),
            item("Purchase Orders", "/store/purchase-orders", "receipt")
                .all_permissions([P::ViewStore, P::ManagePurchases]),
            item("Stock Issues", "/store/stock-issues", "truck")
                .roles([R::StoreManager])
                .any_permission([P::ManageStock]),
        ]),
        NavigationGroup::new("Communication", "message-square")
            .roles(every_role())
            .items([
                item("Chat", "/chat", "messages-square"),
                item("Announcements", "/announcements", "megaphone")
                    .roles([R::SuperAdmin, R::CollegeAdmin])
                    .any_permission([P::SendAnnouncements]),
            ]),
        NavigationGroup::new("HR", "briefcase")
            .roles([R::SuperAdmin, R::HrManager])
            .any_permission([P::ViewHr])
            .items([
                item("Employees", "/hr/employees", "id-card"),
                item("Leave Requests", "/hr/leave", "plane"),
                item("Payroll", "/hr/payroll", "wallet")
                    .roles([R::HrManager])
                    .all_permissions([P::ViewPayroll, P::ProcessPayroll]),
            ]),
        NavigationGroup::new("Help", "life-buoy").items([
            item("Help Center", "/help", "circle-help"),
            item("Contact Support", "/help/contact", "headset"),
        ]),
    ]
}
