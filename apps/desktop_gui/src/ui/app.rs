use std::collections::HashSet;

use chrono::{Datelike, Local};
use client_core::{
    carousel::AUTO_ADVANCE_INTERVAL_SECS, counter::COUNT_UP_DURATION_SECS, validate, AutoAdvance,
    Carousel, ContactStep, ContactWizard, CountUp, Disclosure, Field, FieldError,
    MemoryPreferenceStore, NewsletterForm, PreferenceStore, ServiceFilter, ThemeStore,
    THEME_STORAGE_KEY,
};
use content::Catalog;
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::{EffectiveTheme, FaqItemId, Service, StatId, ThemePreference};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_backend_command;
use crate::ui::style::{self, Palette};

const CONTENT_MAX_WIDTH: f32 = 980.0;
const TOAST_LIFETIME_SECS: f64 = 5.0;
const SECTION_REVEAL_SECS: f32 = 0.6;

const CONTACT_ADDRESS: &str = "1234 Wellness Avenue, Suite 100\nSan Francisco, CA 94110";
const CONTACT_EMAIL: &str = "info@soulivo.com";
const CONTACT_PHONE: &str = "(555) 123-4567";
const CONTACT_HOURS: &str = "Monday-Friday: 9am-6pm\nSaturday: 10am-2pm";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Section {
    Home,
    Stats,
    About,
    Services,
    Testimonials,
    Team,
    Faq,
    Contact,
    Newsletter,
}

impl Section {
    fn nav() -> [Section; 7] {
        [
            Section::Home,
            Section::About,
            Section::Services,
            Section::Testimonials,
            Section::Team,
            Section::Faq,
            Section::Contact,
        ]
    }

    fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Stats => "Stats",
            Section::About => "About",
            Section::Services => "Services",
            Section::Testimonials => "Testimonials",
            Section::Team => "Experts",
            Section::Faq => "FAQ",
            Section::Contact => "Contact",
            Section::Newsletter => "Newsletter",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ToastSeverity {
    Success,
    Error,
}

#[derive(Debug, Clone)]
struct Toast {
    severity: ToastSeverity,
    title: String,
    message: String,
    expires_at: f64,
}

impl Toast {
    fn success(now: f64, title: &str, message: &str) -> Self {
        Self {
            severity: ToastSeverity::Success,
            title: title.to_string(),
            message: message.to_string(),
            expires_at: now + TOAST_LIFETIME_SECS,
        }
    }

    fn error(now: f64, message: &str) -> Self {
        Self {
            severity: ToastSeverity::Error,
            title: "Error".to_string(),
            message: message.to_string(),
            expires_at: now + TOAST_LIFETIME_SECS,
        }
    }
}

pub struct SoulivoApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,

    catalog: Catalog,
    theme: ThemeStore,
    applied_theme: Option<EffectiveTheme>,

    contact: ContactWizard,
    contact_errors: Vec<FieldError>,
    newsletter: NewsletterForm,
    newsletter_error: Option<FieldError>,

    testimonials: Carousel,
    testimonial_timer: AutoAdvance,
    faq: Disclosure<FaqItemId>,
    services_filter: ServiceFilter,
    counters: Vec<(StatId, CountUp)>,
    stats_seen: bool,

    toast: Option<Toast>,
    scroll_target: Option<Section>,
    revealed: HashSet<Section>,
    visible: HashSet<Section>,
}

impl SoulivoApp {
    pub fn bootstrap(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        catalog: Catalog,
        stored_theme: Option<String>,
    ) -> Self {
        let mut prefs = MemoryPreferenceStore::new();
        if let Some(value) = stored_theme {
            prefs.set(THEME_STORAGE_KEY, &value);
        }
        let theme = ThemeStore::new(Box::new(prefs));

        let testimonials = Carousel::new(catalog.testimonials().len());
        let counters = catalog
            .stats()
            .iter()
            .map(|stat| (stat.id, CountUp::new(0, stat.value, COUNT_UP_DURATION_SECS)))
            .collect();

        Self {
            cmd_tx,
            ui_rx,
            catalog,
            theme,
            applied_theme: None,
            contact: ContactWizard::new(),
            contact_errors: Vec::new(),
            newsletter: NewsletterForm::new(),
            newsletter_error: None,
            testimonials,
            testimonial_timer: AutoAdvance::new(AUTO_ADVANCE_INTERVAL_SECS),
            faq: Disclosure::new(),
            services_filter: ServiceFilter::default(),
            counters,
            stats_seen: false,
            toast: None,
            scroll_target: None,
            revealed: HashSet::new(),
            visible: HashSet::new(),
        }
    }

    fn palette(&self) -> Palette {
        style::palette(self.theme.effective())
    }

    fn process_ui_events(&mut self, now: f64) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::ContactAccepted => {
                    self.contact.submission_succeeded();
                    self.contact_errors.clear();
                    self.toast = Some(Toast::success(
                        now,
                        "Message Sent!",
                        "We'll get back to you as soon as possible.",
                    ));
                }
                UiEvent::ContactFailed(err) => {
                    self.contact.submission_failed();
                    self.toast = Some(Toast::error(now, err.message()));
                }
                UiEvent::NewsletterAccepted => {
                    self.newsletter.submission_succeeded();
                    self.newsletter_error = None;
                    self.toast = Some(Toast::success(
                        now,
                        "Subscribed!",
                        "Thank you for subscribing to our newsletter.",
                    ));
                }
                UiEvent::NewsletterFailed(err) => {
                    self.newsletter.submission_failed();
                    self.toast = Some(Toast::error(now, err.message()));
                }
                UiEvent::WorkerUnavailable(message) => {
                    self.toast = Some(Toast::error(now, &message));
                }
            }
        }
    }

    fn observe_system_scheme(&mut self, ctx: &egui::Context) {
        if let Some(scheme) = ctx.input(|i| i.raw.system_theme) {
            let scheme = match scheme {
                egui::Theme::Dark => EffectiveTheme::Dark,
                egui::Theme::Light => EffectiveTheme::Light,
            };
            self.theme.observe_system_scheme(scheme);
        }
    }

    fn apply_theme_if_needed(&mut self, ctx: &egui::Context) {
        let effective = self.theme.effective();
        if self.applied_theme == Some(effective) {
            return;
        }
        // Pin egui's own theme switching so the store stays the single
        // authority on which visuals are active.
        ctx.set_theme(match effective {
            EffectiveTheme::Dark => egui::Theme::Dark,
            EffectiveTheme::Light => egui::Theme::Light,
        });
        let mut style = (*ctx.style()).clone();
        style.visuals = style::visuals_for_theme(effective);
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(12.0, 7.0);
        ctx.set_style(style);
        self.applied_theme = Some(effective);
    }

    /// Inline errors stay visible until the field they point at validates.
    fn refresh_inline_errors(&mut self) {
        let fields = &self.contact.fields;
        self.contact_errors.retain(|err| match err {
            FieldError::NameTooShort => validate::validate_name(&fields.name).is_err(),
            FieldError::EmailInvalid => validate::validate_email(&fields.email).is_err(),
            FieldError::ServiceRequired => validate::validate_service(&fields.service).is_err(),
            FieldError::MessageTooShort => validate::validate_message(&fields.message).is_err(),
            FieldError::PrivacyRequired => validate::validate_privacy(fields.privacy).is_err(),
        });
        if self.newsletter_error.is_some() && self.newsletter.validate().is_ok() {
            self.newsletter_error = None;
        }
    }

    fn expire_toast(&mut self, now: f64) {
        if let Some(toast) = &self.toast {
            if now >= toast.expires_at {
                self.toast = None;
            }
        }
    }

    fn submit_contact(&mut self, now: f64) {
        match self.contact.begin_submission() {
            Some(submission) => {
                if let Err(err) = dispatch_backend_command(
                    &self.cmd_tx,
                    BackendCommand::SubmitContact(submission),
                ) {
                    self.contact.submission_failed();
                    self.toast = Some(Toast::error(now, err.message()));
                }
            }
            None => {
                self.contact_errors = self.contact.validate_all().err().unwrap_or_default();
            }
        }
    }

    fn submit_newsletter(&mut self, now: f64) {
        match self.newsletter.begin_submission() {
            Some(subscription) => {
                if let Err(err) = dispatch_backend_command(
                    &self.cmd_tx,
                    BackendCommand::SubmitNewsletter(subscription),
                ) {
                    self.newsletter.submission_failed();
                    self.toast = Some(Toast::error(now, err.message()));
                }
            }
            None => {
                self.newsletter_error = self.newsletter.validate().err();
            }
        }
    }

    fn show_header(&mut self, ctx: &egui::Context) {
        let palette = self.palette();
        egui::TopBottomPanel::top("site_header")
            .frame(
                egui::Frame::new()
                    .fill(palette.page_fill)
                    .inner_margin(egui::Margin::symmetric(16, 10)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new("Soulivo")
                            .strong()
                            .size(22.0)
                            .color(palette.primary),
                    );
                    ui.add_space(18.0);
                    for section in Section::nav() {
                        if ui.link(section.label()).clicked() {
                            self.scroll_target = Some(section);
                        }
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        self.show_theme_picker(ui);
                        if ui
                            .button(egui::RichText::new("Book a Session").strong())
                            .clicked()
                        {
                            self.scroll_target = Some(Section::Contact);
                        }
                    });
                });
            });
    }

    fn show_theme_picker(&mut self, ui: &mut egui::Ui) {
        let mut preference = self.theme.theme();
        egui::ComboBox::from_id_salt("theme_preference")
            .selected_text(theme_label(preference))
            .width(100.0)
            .show_ui(ui, |ui| {
                for option in [
                    ThemePreference::Light,
                    ThemePreference::Dark,
                    ThemePreference::System,
                ] {
                    ui.selectable_value(&mut preference, option, theme_label(option));
                }
            });
        if preference != self.theme.theme() {
            self.theme.set_theme(preference);
        }
    }

    fn show_page(&mut self, ctx: &egui::Context, now: f64) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    let column_width = CONTENT_MAX_WIDTH.min(ui.available_width());
                    let margin = ((ui.available_width() - column_width) / 2.0).max(0.0);
                    ui.horizontal(|ui| {
                        ui.add_space(margin);
                        ui.vertical(|ui| {
                            ui.set_width(column_width);
                            self.section(ui, now, Section::Home, Self::show_hero);
                            self.section(ui, now, Section::Stats, Self::show_stats);
                            self.section(ui, now, Section::About, Self::show_about);
                            self.section(ui, now, Section::Services, Self::show_services);
                            self.section(ui, now, Section::Testimonials, Self::show_testimonials);
                            self.section(ui, now, Section::Team, Self::show_team);
                            self.section(ui, now, Section::Faq, Self::show_faq);
                            self.section(ui, now, Section::Contact, Self::show_contact);
                            self.section(ui, now, Section::Newsletter, Self::show_newsletter);
                            self.show_footer(ui);
                        });
                    });
                });
        });
    }

    /// Wraps a section body with the scroll anchor, the fade-in reveal and
    /// the visibility bookkeeping that gates timers in later frames.
    fn section(
        &mut self,
        ui: &mut egui::Ui,
        now: f64,
        section: Section,
        body: fn(&mut Self, &mut egui::Ui, f64),
    ) {
        let alpha = ui.ctx().animate_bool_with_time(
            egui::Id::new(("section_reveal", section)),
            self.revealed.contains(&section),
            SECTION_REVEAL_SECS,
        );
        let response = ui
            .scope(|ui| {
                ui.set_opacity(alpha);
                body(self, ui, now);
            })
            .response;

        if self.scroll_target == Some(section) {
            response.scroll_to_me(Some(egui::Align::Min));
            self.scroll_target = None;
        }

        if ui.clip_rect().intersects(response.rect) {
            self.revealed.insert(section);
            self.visible.insert(section);
        } else {
            self.visible.remove(&section);
        }
    }

    fn show_hero(&mut self, ui: &mut egui::Ui, _now: f64) {
        let palette = self.palette();
        ui.add_space(28.0);
        badge(ui, &palette, "Mental Wellness Services");
        ui.add_space(8.0);
        ui.label(
            egui::RichText::new("Find Inner")
                .size(44.0)
                .strong()
                .color(palette.heading),
        );
        ui.label(
            egui::RichText::new("Balance & Mental")
                .size(44.0)
                .strong()
                .color(palette.primary),
        );
        ui.label(
            egui::RichText::new("Clarity")
                .size(44.0)
                .strong()
                .color(palette.heading),
        );
        ui.add_space(10.0);
        ui.label(
            egui::RichText::new(
                "Discover professional mental wellness services that help you overcome \
                 challenges and nurture lasting peace of mind.",
            )
            .size(18.0)
            .color(palette.body),
        );
        ui.add_space(14.0);
        ui.horizontal(|ui| {
            if ui
                .button(egui::RichText::new("Book a Consultation").strong())
                .clicked()
            {
                self.scroll_target = Some(Section::Contact);
            }
            if ui.button("Explore Services").clicked() {
                self.scroll_target = Some(Section::Services);
            }
        });
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            for chip in [
                "Professional Support",
                "Lasting Transformation",
                "98% Satisfaction",
            ] {
                ui.label(
                    egui::RichText::new(format!("✔ {chip}"))
                        .small()
                        .color(palette.muted),
                );
                ui.add_space(8.0);
            }
        });
        ui.add_space(20.0);
    }

    fn show_stats(&mut self, ui: &mut egui::Ui, now: f64) {
        let palette = self.palette();
        if self.visible.contains(&Section::Stats) && !self.stats_seen {
            self.stats_seen = true;
            for (_, counter) in &mut self.counters {
                counter.trigger(now);
            }
        }
        let values: Vec<i64> = self
            .counters
            .iter_mut()
            .map(|(_, counter)| counter.value(now))
            .collect();
        let stats = self.catalog.stats();
        ui.add_space(12.0);
        ui.columns(stats.len(), |columns| {
            for (index, stat) in stats.iter().enumerate() {
                columns[index].vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new(format!("{}{}", values[index], stat.suffix))
                            .size(34.0)
                            .strong()
                            .color(palette.primary),
                    );
                    ui.label(egui::RichText::new(&stat.label).color(palette.muted));
                });
            }
        });
        ui.add_space(12.0);
    }

    fn show_about(&mut self, ui: &mut egui::Ui, _now: f64) {
        let palette = self.palette();
        section_heading(
            ui,
            &palette,
            "Who We Are",
            "Our Mission at Soulivo",
            "Since 2011, we've been making quality mental health care accessible, \
             personalized, and effective.",
        );
        ui.label(
            egui::RichText::new(
                "Soulivo was born from a vision to make quality mental health care accessible, \
                 personalized, and effective. We believe that emotional wellbeing is fundamental \
                 to living a fulfilling life, and everyone deserves support on their journey.",
            )
            .color(palette.body),
        );
        ui.add_space(6.0);
        ui.label(
            egui::RichText::new(
                "Our team of experienced therapists and mindfulness practitioners is dedicated \
                 to providing evidence-based approaches that address the unique needs of each \
                 individual, fostering lasting positive change.",
            )
            .color(palette.body),
        );
        ui.add_space(14.0);

        const FEATURES: [(&str, &str, &str); 4] = [
            (
                "🛡",
                "Licensed Experts",
                "All our therapists are fully licensed and accredited professionals with \
                 advanced degrees in their fields.",
            ),
            (
                "💚",
                "Compassionate Care",
                "We approach every client with empathy, deep understanding, and genuine care \
                 for your wellbeing.",
            ),
            (
                "🎯",
                "Personalized Approach",
                "Customized treatment plans tailored to your specific needs, goals, and life \
                 circumstances.",
            ),
            (
                "🔒",
                "Confidential Service",
                "Your privacy is paramount in all our interactions, with strict adherence to \
                 confidentiality standards.",
            ),
        ];
        for row in FEATURES.chunks(2) {
            ui.columns(2, |columns| {
                for (index, (icon, title, description)) in row.iter().enumerate() {
                    card_frame(&palette).show(&mut columns[index], |ui| {
                        ui.horizontal(|ui| {
                            ui.label(egui::RichText::new(*icon).size(20.0));
                            ui.label(
                                egui::RichText::new(*title)
                                    .strong()
                                    .size(16.0)
                                    .color(palette.heading),
                            );
                        });
                        ui.label(
                            egui::RichText::new(*description)
                                .small()
                                .color(palette.body),
                        );
                    });
                }
            });
            ui.add_space(8.0);
        }
    }

    fn show_services(&mut self, ui: &mut egui::Ui, _now: f64) {
        let palette = self.palette();
        section_heading(
            ui,
            &palette,
            "What We Offer",
            "Services for Your Wellbeing",
            "Explore the ways we can support your mental wellness journey.",
        );
        ui.horizontal(|ui| {
            for option in ServiceFilter::options() {
                if ui
                    .selectable_label(self.services_filter == option, option.label())
                    .clicked()
                {
                    self.services_filter = option;
                }
            }
        });
        ui.add_space(12.0);

        let filtered: Vec<Service> = self
            .services_filter
            .apply(self.catalog.services())
            .into_iter()
            .cloned()
            .collect();
        let mut prefill: Option<String> = None;
        for row in filtered.chunks(3) {
            ui.columns(3, |columns| {
                for (index, service) in row.iter().enumerate() {
                    card_frame(&palette).show(&mut columns[index], |ui| {
                        ui.label(egui::RichText::new(style::icon_glyph(&service.icon)).size(26.0));
                        ui.label(
                            egui::RichText::new(&service.name)
                                .strong()
                                .size(17.0)
                                .color(palette.heading),
                        );
                        ui.label(
                            egui::RichText::new(service.category.label())
                                .small()
                                .color(style::category_color(&palette, service.category)),
                        );
                        ui.add_space(4.0);
                        ui.label(
                            egui::RichText::new(&service.description)
                                .small()
                                .color(palette.body),
                        );
                        ui.add_space(6.0);
                        if ui.link("Book this service").clicked() {
                            prefill = Some(service.slug.clone());
                        }
                    });
                }
            });
            ui.add_space(10.0);
        }
        if let Some(slug) = prefill {
            self.contact.fields.service = slug;
            self.scroll_target = Some(Section::Contact);
        }
    }

    fn show_testimonials(&mut self, ui: &mut egui::Ui, now: f64) {
        let palette = self.palette();
        section_heading(
            ui,
            &palette,
            "Client Stories",
            "What Our Clients Say",
            "Real experiences from people who found balance with Soulivo.",
        );
        let Some(testimonial) = self
            .catalog
            .testimonials()
            .get(self.testimonials.index())
            .cloned()
        else {
            return;
        };

        let card = card_frame(&palette).show(ui, |ui| {
            ui.label(
                egui::RichText::new(&testimonial.content)
                    .italics()
                    .size(16.0)
                    .color(palette.body),
            );
            ui.add_space(10.0);
            ui.horizontal(|ui| {
                avatar(ui, &testimonial.name, palette.primary);
                ui.vertical(|ui| {
                    ui.label(
                        egui::RichText::new(&testimonial.name)
                            .strong()
                            .color(palette.heading),
                    );
                    ui.label(
                        egui::RichText::new(&testimonial.title)
                            .small()
                            .color(palette.muted),
                    );
                });
            });
        });
        let hovered = ui.rect_contains_pointer(card.response.rect);

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            if ui.button("⟨").clicked() {
                self.testimonials.prev();
                self.testimonial_timer.reset();
            }
            for index in 0..self.testimonials.len() {
                let active = index == self.testimonials.index();
                if ui
                    .selectable_label(active, if active { "●" } else { "○" })
                    .clicked()
                {
                    self.testimonials.jump_to(index);
                    self.testimonial_timer.reset();
                }
            }
            if ui.button("⟩").clicked() {
                self.testimonials.next();
                self.testimonial_timer.reset();
            }
        });

        let visible = self.visible.contains(&Section::Testimonials);
        if self.testimonial_timer.poll(now, visible && !hovered) {
            self.testimonials.next();
        }
    }

    fn show_team(&mut self, ui: &mut egui::Ui, _now: f64) {
        let palette = self.palette();
        section_heading(
            ui,
            &palette,
            "Meet Our Experts",
            "The Team Behind Soulivo",
            "Licensed professionals dedicated to supporting your mental wellness journey.",
        );
        let experts = self.catalog.experts().to_vec();
        for row in experts.chunks(2) {
            ui.columns(2, |columns| {
                for (index, expert) in row.iter().enumerate() {
                    card_frame(&palette).show(&mut columns[index], |ui| {
                        ui.horizontal(|ui| {
                            avatar(ui, &expert.name, palette.secondary);
                            ui.vertical(|ui| {
                                ui.label(
                                    egui::RichText::new(&expert.name)
                                        .strong()
                                        .color(palette.heading),
                                );
                                ui.label(
                                    egui::RichText::new(&expert.title)
                                        .small()
                                        .color(palette.primary),
                                );
                            });
                        });
                        ui.add_space(4.0);
                        ui.label(egui::RichText::new(&expert.bio).small().color(palette.body));
                        let mut links = Vec::new();
                        if expert.social.linkedin.is_some() {
                            links.push("LinkedIn");
                        }
                        if expert.social.twitter.is_some() {
                            links.push("Twitter");
                        }
                        if expert.social.email.is_some() {
                            links.push("Email");
                        }
                        if !links.is_empty() {
                            ui.add_space(4.0);
                            ui.label(
                                egui::RichText::new(links.join(" · "))
                                    .small()
                                    .color(palette.muted),
                            );
                        }
                    });
                }
            });
            ui.add_space(10.0);
        }
    }

    fn show_faq(&mut self, ui: &mut egui::Ui, _now: f64) {
        let palette = self.palette();
        section_heading(
            ui,
            &palette,
            "Common Questions",
            "Frequently Asked Questions",
            "Find answers to common questions about our services, approach, and what to \
             expect when working with our team of mental wellness experts.",
        );
        let items = self.catalog.faq().to_vec();
        for item in &items {
            let open = self.faq.is_open(item.id);
            card_frame(&palette).show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(if open { "−" } else { "+" })
                            .strong()
                            .color(palette.primary),
                    );
                    if ui
                        .selectable_label(
                            open,
                            egui::RichText::new(&item.question)
                                .strong()
                                .color(palette.heading),
                        )
                        .clicked()
                    {
                        self.faq.toggle(item.id);
                    }
                });
                if open {
                    ui.add_space(4.0);
                    ui.label(egui::RichText::new(&item.answer).color(palette.body));
                }
            });
            ui.add_space(6.0);
        }
    }

    fn show_contact(&mut self, ui: &mut egui::Ui, now: f64) {
        let palette = self.palette();
        section_heading(
            ui,
            &palette,
            "Connect With Us",
            "Begin Your Wellness Journey",
            "Take the first step toward emotional wellbeing by reaching out to our team of \
             experienced professionals. We're here to support your personal growth journey.",
        );
        ui.columns(2, |columns| {
            self.show_contact_info(&mut columns[0]);
            self.show_contact_form(&mut columns[1], now);
        });
    }

    fn show_contact_info(&mut self, ui: &mut egui::Ui) {
        let palette = self.palette();
        card_frame(&palette).show(ui, |ui| {
            ui.label(
                egui::RichText::new("Contact Information")
                    .strong()
                    .size(18.0)
                    .color(palette.heading),
            );
            ui.label(
                egui::RichText::new(
                    "Reach out to us directly or fill out the form to schedule your consultation.",
                )
                .small()
                .color(palette.body),
            );
            ui.add_space(8.0);
            for (title, detail) in [
                ("Our Location", CONTACT_ADDRESS),
                ("Email Us", CONTACT_EMAIL),
                ("Call Us", CONTACT_PHONE),
                ("Business Hours", CONTACT_HOURS),
            ] {
                ui.label(
                    egui::RichText::new(title)
                        .strong()
                        .small()
                        .color(palette.heading),
                );
                ui.label(egui::RichText::new(detail).small().color(palette.muted));
                ui.add_space(6.0);
            }
        });
    }

    fn show_contact_form(&mut self, ui: &mut egui::Ui, now: f64) {
        let palette = self.palette();
        let step = self.contact.step();
        card_frame(&palette).show(ui, |ui| {
            ui.label(
                egui::RichText::new("Book Your Consultation")
                    .strong()
                    .size(18.0)
                    .color(palette.heading),
            );
            ui.label(
                egui::RichText::new(
                    "Fill out the form below to schedule a session or request more information.",
                )
                .small()
                .color(palette.body),
            );
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(ContactStep::PersonalDetails.label())
                        .small()
                        .strong()
                        .color(palette.primary),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(egui::RichText::new(ContactStep::ServiceDetails.label()).small().color(
                        if step == ContactStep::ServiceDetails {
                            palette.primary
                        } else {
                            palette.muted
                        },
                    ));
                });
            });
            ui.add(
                egui::ProgressBar::new(match step {
                    ContactStep::PersonalDetails => 0.5,
                    ContactStep::ServiceDetails => 1.0,
                })
                .desired_height(6.0),
            );
            ui.add_space(10.0);

            match step {
                ContactStep::PersonalDetails => self.show_personal_details_step(ui, &palette),
                ContactStep::ServiceDetails => self.show_service_details_step(ui, &palette, now),
            }

            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new("🔒 All information is encrypted and secure")
                        .small()
                        .color(palette.muted),
                );
            });
        });
    }

    fn show_personal_details_step(&mut self, ui: &mut egui::Ui, palette: &Palette) {
        labeled_field(ui, "Full Name", &mut self.contact.fields.name, "John Doe");
        inline_error(ui, palette, &self.contact_errors, Field::Name);
        labeled_field(
            ui,
            "Email Address",
            &mut self.contact.fields.email,
            "your@email.com",
        );
        inline_error(ui, palette, &self.contact_errors, Field::Email);
        labeled_field(
            ui,
            "Phone Number",
            &mut self.contact.fields.phone,
            "(555) 123-4567",
        );
        ui.label(
            egui::RichText::new("Optional, but recommended for appointment confirmations")
                .small()
                .color(palette.muted),
        );
        ui.add_space(8.0);
        if ui
            .add_sized(
                [ui.available_width(), 34.0],
                egui::Button::new(egui::RichText::new("Continue").strong()),
            )
            .clicked()
        {
            if let Err(errors) = self.contact.advance() {
                self.contact_errors = errors;
            }
        }
    }

    fn show_service_details_step(&mut self, ui: &mut egui::Ui, palette: &Palette, now: f64) {
        ui.label(egui::RichText::new("Service You're Interested In").strong());
        let selected_name = self
            .catalog
            .service_by_slug(&self.contact.fields.service)
            .map(|service| service.name.clone())
            .unwrap_or_else(|| "Select a service".to_string());
        let services: Vec<(String, String)> = self
            .catalog
            .services()
            .iter()
            .map(|service| (service.slug.clone(), service.name.clone()))
            .collect();
        egui::ComboBox::from_id_salt("contact_service")
            .selected_text(selected_name)
            .width(ui.available_width())
            .show_ui(ui, |ui| {
                for (slug, name) in &services {
                    ui.selectable_value(
                        &mut self.contact.fields.service,
                        slug.clone(),
                        name.as_str(),
                    );
                }
            });
        inline_error(ui, palette, &self.contact_errors, Field::Service);

        ui.label(egui::RichText::new("Tell Us More").strong());
        ui.add(
            egui::TextEdit::multiline(&mut self.contact.fields.message)
                .hint_text("Share your goals or any specific concerns you'd like to address...")
                .desired_rows(5)
                .desired_width(f32::INFINITY),
        );
        inline_error(ui, palette, &self.contact_errors, Field::Message);

        ui.checkbox(
            &mut self.contact.fields.privacy,
            "I agree to the privacy policy and consent to being contacted regarding my inquiry.",
        );
        inline_error(ui, palette, &self.contact_errors, Field::Privacy);

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui.button("Back").clicked() {
                self.contact.back();
            }
            let submitting = self.contact.is_submitting();
            let label = if submitting {
                "Sending..."
            } else {
                "Submit Request"
            };
            if ui
                .add_enabled(
                    !submitting,
                    egui::Button::new(egui::RichText::new(label).strong()),
                )
                .clicked()
            {
                self.submit_contact(now);
            }
        });
    }

    fn show_newsletter(&mut self, ui: &mut egui::Ui, now: f64) {
        let palette = self.palette();
        ui.add_space(20.0);
        egui::Frame::new()
            .fill(palette.badge_fill)
            .corner_radius(14.0)
            .inner_margin(egui::Margin::symmetric(24, 20))
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new("Subscribe to Our Newsletter")
                            .size(24.0)
                            .strong()
                            .color(palette.heading),
                    );
                    ui.label(
                        egui::RichText::new(
                            "Stay updated with the latest wellness tips, event announcements, \
                             and exclusive content.",
                        )
                        .color(palette.body),
                    );
                    ui.add_space(10.0);
                    ui.horizontal(|ui| {
                        let width = ui.available_width();
                        ui.add_space(((width - 420.0) / 2.0).max(0.0));
                        ui.add_sized(
                            [300.0, 30.0],
                            egui::TextEdit::singleline(&mut self.newsletter.email)
                                .hint_text("Enter your email address"),
                        );
                        let submitting = self.newsletter.is_submitting();
                        let label = if submitting { "Sending..." } else { "Subscribe" };
                        if ui
                            .add_enabled(
                                !submitting,
                                egui::Button::new(egui::RichText::new(label).strong()),
                            )
                            .clicked()
                        {
                            self.submit_newsletter(now);
                        }
                    });
                    if let Some(err) = &self.newsletter_error {
                        ui.label(
                            egui::RichText::new(err.to_string())
                                .small()
                                .color(palette.error_fill),
                        );
                    }
                });
            });
        ui.add_space(8.0);
    }

    fn show_footer(&mut self, ui: &mut egui::Ui) {
        let palette = self.palette();
        ui.add_space(20.0);
        ui.separator();
        ui.add_space(10.0);
        ui.columns(3, |columns| {
            columns[0].label(
                egui::RichText::new("Soulivo")
                    .strong()
                    .size(18.0)
                    .color(palette.primary),
            );
            columns[0].label(
                egui::RichText::new(
                    "A sanctuary for mental wellness, offering professional therapy and \
                     mindfulness services.",
                )
                .small()
                .color(palette.muted),
            );

            columns[1].label(
                egui::RichText::new("Quick Links")
                    .strong()
                    .color(palette.heading),
            );
            for section in Section::nav() {
                if columns[1].link(section.label()).clicked() {
                    self.scroll_target = Some(section);
                }
            }

            columns[2].label(
                egui::RichText::new("Contact")
                    .strong()
                    .color(palette.heading),
            );
            for detail in [CONTACT_ADDRESS, CONTACT_EMAIL, CONTACT_PHONE] {
                columns[2].label(egui::RichText::new(detail).small().color(palette.muted));
            }
        });
        ui.add_space(10.0);
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(format!(
                    "© {} Soulivo. All rights reserved.",
                    Local::now().year()
                ))
                .small()
                .color(palette.muted),
            );
        });
        ui.add_space(16.0);
    }

    fn show_toast(&mut self, ctx: &egui::Context) {
        let Some(toast) = &self.toast else {
            return;
        };
        let palette = self.palette();
        let fill = match toast.severity {
            ToastSeverity::Success => palette.success_fill,
            ToastSeverity::Error => palette.error_fill,
        };
        egui::Area::new(egui::Id::new("toast_overlay"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -16.0))
            .show(ctx, |ui| {
                egui::Frame::new()
                    .fill(fill)
                    .corner_radius(10.0)
                    .inner_margin(egui::Margin::symmetric(14, 10))
                    .show(ui, |ui| {
                        ui.label(
                            egui::RichText::new(&toast.title)
                                .strong()
                                .color(egui::Color32::WHITE),
                        );
                        ui.label(egui::RichText::new(&toast.message).color(egui::Color32::WHITE));
                    });
            });
    }
}

impl eframe::App for SoulivoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);

        self.process_ui_events(now);
        self.observe_system_scheme(ctx);
        self.apply_theme_if_needed(ctx);
        self.refresh_inline_errors();
        self.expire_toast(now);

        self.show_header(ctx);
        self.show_page(ctx, now);
        self.show_toast(ctx);

        let animating = self.counters.iter().any(|(_, counter)| counter.is_animating());
        if animating {
            ctx.request_repaint_after(std::time::Duration::from_millis(16));
        } else {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        storage.set_string(THEME_STORAGE_KEY, self.theme.theme().as_str().to_string());
    }
}

fn theme_label(preference: ThemePreference) -> &'static str {
    match preference {
        ThemePreference::Light => "Light",
        ThemePreference::Dark => "Dark",
        ThemePreference::System => "System",
    }
}

fn card_frame(palette: &Palette) -> egui::Frame {
    egui::Frame::new()
        .fill(palette.card_fill)
        .stroke(egui::Stroke::new(1.0, palette.card_stroke))
        .corner_radius(12.0)
        .inner_margin(egui::Margin::symmetric(16, 14))
}

fn badge(ui: &mut egui::Ui, palette: &Palette, text: &str) {
    egui::Frame::new()
        .fill(palette.badge_fill)
        .corner_radius(10.0)
        .inner_margin(egui::Margin::symmetric(10, 4))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(text)
                    .small()
                    .strong()
                    .color(palette.primary),
            );
        });
}

fn section_heading(ui: &mut egui::Ui, palette: &Palette, label: &str, title: &str, subtitle: &str) {
    ui.add_space(28.0);
    badge(ui, palette, label);
    ui.add_space(6.0);
    ui.label(
        egui::RichText::new(title)
            .size(30.0)
            .strong()
            .color(palette.heading),
    );
    ui.label(egui::RichText::new(subtitle).color(palette.body));
    ui.add_space(14.0);
}

fn labeled_field(ui: &mut egui::Ui, label: &str, value: &mut String, hint: &str) {
    ui.label(egui::RichText::new(label).strong());
    ui.add(
        egui::TextEdit::singleline(value)
            .hint_text(hint)
            .desired_width(f32::INFINITY),
    );
}

fn inline_error(ui: &mut egui::Ui, palette: &Palette, errors: &[FieldError], field: Field) {
    if let Some(err) = errors.iter().find(|err| err.field() == field) {
        ui.label(
            egui::RichText::new(err.to_string())
                .small()
                .color(palette.error_fill),
        );
    }
}

fn avatar(ui: &mut egui::Ui, name: &str, fill: egui::Color32) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(40.0, 40.0), egui::Sense::hover());
    ui.painter()
        .circle_filled(rect.center(), 20.0, fill.gamma_multiply(0.85));
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        style::initials(name),
        egui::FontId::proportional(15.0),
        egui::Color32::WHITE,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::events::{UiError, NEWSLETTER_FAILURE_FALLBACK};
    use client_core::SubmissionError;
    use crossbeam_channel::bounded;

    fn test_app(stored_theme: Option<&str>) -> SoulivoApp {
        let (cmd_tx, _cmd_rx) = bounded(8);
        let (_ui_tx, ui_rx) = bounded(8);
        SoulivoApp::bootstrap(
            cmd_tx,
            ui_rx,
            Catalog::load().expect("catalog"),
            stored_theme.map(str::to_string),
        )
    }

    #[test]
    fn stored_dark_preference_is_effective_before_the_first_frame() {
        let app = test_app(Some("dark"));
        assert_eq!(app.theme.theme(), ThemePreference::Dark);
        assert_eq!(app.theme.effective(), EffectiveTheme::Dark);
    }

    #[test]
    fn inline_errors_clear_once_the_field_is_corrected() {
        let mut app = test_app(None);
        app.contact_errors = vec![FieldError::NameTooShort, FieldError::EmailInvalid];
        app.contact.fields.name = "Sarah".to_string();
        app.refresh_inline_errors();
        assert_eq!(app.contact_errors, vec![FieldError::EmailInvalid]);
    }

    #[test]
    fn toast_expires_after_its_lifetime() {
        let mut app = test_app(None);
        app.toast = Some(Toast::success(
            10.0,
            "Subscribed!",
            "Thank you for subscribing to our newsletter.",
        ));
        app.expire_toast(12.0);
        assert!(app.toast.is_some());
        app.expire_toast(15.1);
        assert!(app.toast.is_none());
    }

    #[test]
    fn newsletter_failure_event_keeps_the_address_and_raises_a_toast() {
        let (cmd_tx, _cmd_rx) = bounded(8);
        let (ui_tx, ui_rx) = bounded(8);
        let mut app = SoulivoApp::bootstrap(
            cmd_tx,
            ui_rx,
            Catalog::load().expect("catalog"),
            None,
        );

        app.newsletter.email = "user@example.com".to_string();
        app.newsletter.begin_submission().expect("subscription");

        let err = SubmissionError::Rejected {
            endpoint: "newsletter",
            status: client_core::submission::StatusCode::INTERNAL_SERVER_ERROR,
            message: String::new(),
        };
        ui_tx
            .send(UiEvent::NewsletterFailed(UiError::from_submission(
                &err,
                NEWSLETTER_FAILURE_FALLBACK,
            )))
            .expect("send");

        app.process_ui_events(1.0);
        assert!(!app.newsletter.is_submitting());
        assert_eq!(app.newsletter.email, "user@example.com");
        let toast = app.toast.as_ref().expect("toast");
        assert_eq!(toast.severity, ToastSeverity::Error);
        assert_eq!(toast.message, NEWSLETTER_FAILURE_FALLBACK);
    }
}
