use super::Strings;

pub static STRINGS: Strings = Strings {
    app_title: "CRM",
    loading: "Loading...",
    save: "Save",
    cancel: "Cancel",
    close: "Close",
    create: "Create",
    edit: "Edit",
    delete: "Delete",
    refresh: "Refresh",
    search: "Search",
    filters: "Filters",
    clear_filters: "Clear filters",
    all: "All",
    actions: "Actions",
    empty_table: "No records",
    load_failed: "Failed to load data",
    retry: "Retry",
    back_home: "Return to the main page",
    created_success: "Record created",
    saved_success: "Changes saved",
    deleted_success: "Record deleted",
    generic_error: "Something went wrong. Please try again.",
    confirm_delete_title: "Delete record?",
    confirm_delete_text: "This action cannot be undone.",
    deleting: "Deleting...",
    saving: "Saving...",
    new_record: "New record",
    edit_record: "Edit record",
    first_page: "First page",
    prev_page: "Previous page",
    next_page: "Next page",
    last_page: "Last page",
    required: "Required field",
    invalid_phone: "Invalid phone number",
    not_integer: "Enter a whole number",
    not_number: "Enter a number",
    too_long: "At most {} characters",
    below_min: "Value is too small",
    login_title: "Sign in",
    username: "Username",
    password: "Password",
    sign_in: "Sign in",
    signing_in: "Signing in...",
    logout: "Log out",
    login_failed: "Wrong username or password",
    forbidden: "You do not have access to this section",
    session_expired: "Session expired, please sign in again",
    not_found_title: "404",
    not_found_text: "The page you are looking for does not exist",
    server_error_title: "500",
    server_error_text: "The server failed to process the request",
    nav_bids: "Bids",
    nav_customers: "Customers",
    nav_branches: "Branches",
    nav_categories: "Categories",
    nav_products: "Products",
    nav_qualities: "Qualities",
    nav_factory_statuses: "Factory statuses",
    nav_settings: "Settings",
    language: "Language",
    toggle_sidebar: "Toggle sidebar",
    field_id: "ID",
    field_name: "Name",
    field_address: "Address",
    field_phone: "Phone",
    field_full_name: "Full name",
    field_branch: "Branch",
    field_comment: "Comment",
    field_category: "Category",
    field_quality: "Quality",
    field_price: "Price",
    field_image: "Image",
    field_color: "Color",
    field_customer: "Customer",
    field_status: "Status",
    field_created_at: "Created",
    field_total: "Total",
    field_product: "Product",
    field_quantity: "Quantity",
    field_amount: "Amount",
    field_currency: "Currency",
    field_paid_at: "Paid at",
    field_note: "Note",
    field_service: "Service",
    bid_title: "Bid #{}",
    tab_general: "General",
    tab_calculation: "Calculation",
    tab_results: "Results",
    calculate: "Calculate",
    calculating: "Calculating...",
    forecast_done: "Calculation finished",
    results_empty: "Run the calculation to see results",
    product_lines: "Products",
    service_lines: "Services",
    transactions: "Payments",
    add_product: "Add product",
    add_service: "Add service",
    remove_line: "Remove",
    subtotal_products: "Products total",
    subtotal_services: "Services total",
    paid: "Paid",
    balance: "Balance",
    total_local: "Total in local currency",
    estimate_hint: "Preliminary estimate; run the calculation for final figures",
    open: "Open",
    company_name: "Company name",
    currency_rate: "Currency rate",
    currency_code: "Currency code",
    static_host: "Static files host",
};
