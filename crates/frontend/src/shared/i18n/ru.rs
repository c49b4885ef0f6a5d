use super::Strings;

pub static STRINGS: Strings = Strings {
    app_title: "CRM",
    loading: "Загрузка...",
    save: "Сохранить",
    cancel: "Отмена",
    close: "Закрыть",
    create: "Создать",
    edit: "Изменить",
    delete: "Удалить",
    refresh: "Обновить",
    search: "Поиск",
    filters: "Фильтры",
    clear_filters: "Сбросить фильтры",
    all: "Все",
    actions: "Действия",
    empty_table: "Нет записей",
    load_failed: "Не удалось загрузить данные",
    retry: "Повторить",
    back_home: "Вернуться на главную",
    created_success: "Запись создана",
    saved_success: "Изменения сохранены",
    deleted_success: "Запись удалена",
    generic_error: "Что-то пошло не так. Попробуйте ещё раз.",
    confirm_delete_title: "Удалить запись?",
    confirm_delete_text: "Это действие нельзя отменить.",
    deleting: "Удаление...",
    saving: "Сохранение...",
    new_record: "Новая запись",
    edit_record: "Редактирование",
    first_page: "Первая страница",
    prev_page: "Предыдущая страница",
    next_page: "Следующая страница",
    last_page: "Последняя страница",
    required: "Обязательное поле",
    invalid_phone: "Неверный номер телефона",
    not_integer: "Введите целое число",
    not_number: "Введите число",
    too_long: "Не более {} символов",
    below_min: "Слишком маленькое значение",
    login_title: "Вход в систему",
    username: "Логин",
    password: "Пароль",
    sign_in: "Войти",
    signing_in: "Вход...",
    logout: "Выйти",
    login_failed: "Неверный логин или пароль",
    forbidden: "Нет доступа к этому разделу",
    session_expired: "Сессия истекла, войдите снова",
    not_found_title: "404",
    not_found_text: "Страница не найдена",
    server_error_title: "500",
    server_error_text: "Сервер не смог обработать запрос",
    nav_bids: "Заявки",
    nav_customers: "Клиенты",
    nav_branches: "Филиалы",
    nav_categories: "Категории",
    nav_products: "Продукты",
    nav_qualities: "Качества",
    nav_factory_statuses: "Статусы завода",
    nav_settings: "Настройки",
    language: "Язык",
    toggle_sidebar: "Свернуть меню",
    field_id: "ID",
    field_name: "Наименование",
    field_address: "Адрес",
    field_phone: "Телефон",
    field_full_name: "ФИО",
    field_branch: "Филиал",
    field_comment: "Комментарий",
    field_category: "Категория",
    field_quality: "Качество",
    field_price: "Цена",
    field_image: "Изображение",
    field_color: "Цвет",
    field_customer: "Клиент",
    field_status: "Статус",
    field_created_at: "Создана",
    field_total: "Итого",
    field_product: "Продукт",
    field_quantity: "Количество",
    field_amount: "Сумма",
    field_currency: "Валюта",
    field_paid_at: "Дата оплаты",
    field_note: "Примечание",
    field_service: "Услуга",
    bid_title: "Заявка №{}",
    tab_general: "Основное",
    tab_calculation: "Расчёт",
    tab_results: "Результаты",
    calculate: "Рассчитать",
    calculating: "Расчёт...",
    forecast_done: "Расчёт выполнен",
    results_empty: "Выполните расчёт, чтобы увидеть результаты",
    product_lines: "Продукты",
    service_lines: "Услуги",
    transactions: "Оплаты",
    add_product: "Добавить продукт",
    add_service: "Добавить услугу",
    remove_line: "Убрать",
    subtotal_products: "Итого по продуктам",
    subtotal_services: "Итого по услугам",
    paid: "Оплачено",
    balance: "Остаток",
    total_local: "Итого в местной валюте",
    estimate_hint: "Предварительная оценка; итоговые суммы после расчёта",
    open: "Открыть",
    company_name: "Название компании",
    currency_rate: "Курс валюты",
    currency_code: "Код валюты",
    static_host: "Хост статических файлов",
};
