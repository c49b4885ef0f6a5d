use super::Strings;

pub static STRINGS: Strings = Strings {
    app_title: "CRM",
    loading: "Yuklanmoqda...",
    save: "Saqlash",
    cancel: "Bekor qilish",
    close: "Yopish",
    create: "Yaratish",
    edit: "Tahrirlash",
    delete: "O'chirish",
    refresh: "Yangilash",
    search: "Qidirish",
    filters: "Filtrlar",
    clear_filters: "Filtrlarni tozalash",
    all: "Barchasi",
    actions: "Amallar",
    empty_table: "Yozuvlar yo'q",
    load_failed: "Ma'lumotlarni yuklab bo'lmadi",
    retry: "Qayta urinish",
    back_home: "Bosh sahifaga qaytish",
    created_success: "Yozuv yaratildi",
    saved_success: "O'zgarishlar saqlandi",
    deleted_success: "Yozuv o'chirildi",
    generic_error: "Xatolik yuz berdi. Qayta urinib ko'ring.",
    confirm_delete_title: "Yozuv o'chirilsinmi?",
    confirm_delete_text: "Bu amalni ortga qaytarib bo'lmaydi.",
    deleting: "O'chirilmoqda...",
    saving: "Saqlanmoqda...",
    new_record: "Yangi yozuv",
    edit_record: "Tahrirlash",
    first_page: "Birinchi sahifa",
    prev_page: "Oldingi sahifa",
    next_page: "Keyingi sahifa",
    last_page: "Oxirgi sahifa",
    required: "Majburiy maydon",
    invalid_phone: "Telefon raqami noto'g'ri",
    not_integer: "Butun son kiriting",
    not_number: "Son kiriting",
    too_long: "Ko'pi bilan {} belgi",
    below_min: "Qiymat juda kichik",
    login_title: "Tizimga kirish",
    username: "Login",
    password: "Parol",
    sign_in: "Kirish",
    signing_in: "Kirilmoqda...",
    logout: "Chiqish",
    login_failed: "Login yoki parol noto'g'ri",
    forbidden: "Bu bo'limga ruxsatingiz yo'q",
    session_expired: "Sessiya tugadi, qayta kiring",
    not_found_title: "404",
    not_found_text: "Sahifa topilmadi",
    server_error_title: "500",
    server_error_text: "Server so'rovni bajara olmadi",
    nav_bids: "Arizalar",
    nav_customers: "Mijozlar",
    nav_branches: "Filiallar",
    nav_categories: "Kategoriyalar",
    nav_products: "Mahsulotlar",
    nav_qualities: "Sifatlar",
    nav_factory_statuses: "Zavod holatlari",
    nav_settings: "Sozlamalar",
    language: "Til",
    toggle_sidebar: "Menyuni yig'ish",
    field_id: "ID",
    field_name: "Nomi",
    field_address: "Manzil",
    field_phone: "Telefon",
    field_full_name: "F.I.Sh.",
    field_branch: "Filial",
    field_comment: "Izoh",
    field_category: "Kategoriya",
    field_quality: "Sifat",
    field_price: "Narx",
    field_image: "Rasm",
    field_color: "Rang",
    field_customer: "Mijoz",
    field_status: "Holat",
    field_created_at: "Yaratilgan",
    field_total: "Jami",
    field_product: "Mahsulot",
    field_quantity: "Miqdor",
    field_amount: "Summa",
    field_currency: "Valyuta",
    field_paid_at: "To'langan sana",
    field_note: "Eslatma",
    field_service: "Xizmat",
    bid_title: "Ariza №{}",
    tab_general: "Asosiy",
    tab_calculation: "Hisob-kitob",
    tab_results: "Natijalar",
    calculate: "Hisoblash",
    calculating: "Hisoblanmoqda...",
    forecast_done: "Hisob-kitob bajarildi",
    results_empty: "Natijalarni ko'rish uchun hisoblang",
    product_lines: "Mahsulotlar",
    service_lines: "Xizmatlar",
    transactions: "To'lovlar",
    add_product: "Mahsulot qo'shish",
    add_service: "Xizmat qo'shish",
    remove_line: "Olib tashlash",
    subtotal_products: "Mahsulotlar jami",
    subtotal_services: "Xizmatlar jami",
    paid: "To'langan",
    balance: "Qoldiq",
    total_local: "Mahalliy valyutada jami",
    estimate_hint: "Taxminiy hisob; yakuniy summalar hisoblashdan keyin",
    open: "Ochish",
    company_name: "Kompaniya nomi",
    currency_rate: "Valyuta kursi",
    currency_code: "Valyuta kodi",
    static_host: "Statik fayllar xosti",
};
