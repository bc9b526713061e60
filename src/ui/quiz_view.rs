// SPDX-License-Identifier: MPL-2.0
//! Quiz section: intro screen, question flow, and result screen.

use crate::content::{Catalog, Choice};
use crate::domain::quiz::{QuizStage, QuizState, QUESTION_COUNT};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{button, radio, Column, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the quiz.
pub struct ViewContext<'a> {
    pub catalog: &'a Catalog,
    pub quiz: &'a QuizState,
}

/// Messages emitted by the quiz section.
#[derive(Debug, Clone)]
pub enum Message {
    Start,
    Answer(u8, Choice),
    Next,
    Previous,
    Submit,
    Restart,
}

/// Render the quiz section.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let body: Element<'a, Message> = match ctx.quiz.stage() {
        QuizStage::Intro => intro(),
        QuizStage::InProgress => question_flow(&ctx),
        QuizStage::Complete { score } => result(score),
    };

    Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .width(Length::Fill)
        .push(Text::new("Quiz su Regalbuto").size(typography::TITLE_LG))
        .push(body)
        .into()
}

fn intro<'a>() -> Element<'a, Message> {
    let description = Text::new(
        "Dieci domande su monumenti, natura e tradizioni del paese. \
         Quanto conosci Regalbuto?",
    )
    .size(typography::BODY_LG);

    let start = button(Text::new("Inizia il quiz").size(typography::BODY))
        .on_press(Message::Start)
        .padding(spacing::SM)
        .style(styles::button::primary);

    Column::new()
        .spacing(spacing::MD)
        .push(description)
        .push(start)
        .into()
}

fn question_flow<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let current = ctx.quiz.current_question();
    let Some(question) = ctx.catalog.questions.iter().find(|q| q.id == current) else {
        // Content/key mismatch is a packaging defect; render nothing rather
        // than panicking.
        return Text::new("Domanda non disponibile").into();
    };

    let progress = Text::new(format!("Domanda {current} di {QUESTION_COUNT}"))
        .size(typography::BODY_SM);
    let prompt = Text::new(&question.prompt).size(typography::TITLE_SM);

    let selected = ctx.quiz.answer(current);
    let mut choices = Column::new().spacing(spacing::XS);
    for choice in &question.choices {
        choices = choices.push(radio(
            choice.text.as_str(),
            choice.key,
            selected,
            move |key| Message::Answer(current, key),
        ));
    }

    let mut controls = Row::new().spacing(spacing::XS);
    if current > 1 {
        controls = controls.push(
            button(Text::new("Indietro").size(typography::BODY))
                .on_press(Message::Previous)
                .padding(spacing::XS)
                .style(styles::button::outline),
        );
    }
    if current < QUESTION_COUNT {
        controls = controls.push(
            button(Text::new("Avanti").size(typography::BODY))
                .on_press(Message::Next)
                .padding(spacing::XS)
                .style(styles::button::primary),
        );
    } else {
        controls = controls.push(
            button(Text::new("Invia").size(typography::BODY))
                .on_press(Message::Submit)
                .padding(spacing::XS)
                .style(styles::button::primary),
        );
    }

    Container::new(
        Column::new()
            .spacing(spacing::MD)
            .padding(spacing::MD)
            .push(progress)
            .push(prompt)
            .push(choices)
            .push(controls),
    )
    .width(Length::Fill)
    .style(styles::container::card)
    .into()
}

fn result<'a>(score: u8) -> Element<'a, Message> {
    let summary = Text::new(format!(
        "Hai risposto correttamente a {score} su {QUESTION_COUNT} domande. {}",
        QuizState::score_message(score)
    ))
    .size(typography::BODY_LG);

    let restart = button(Text::new("Ricomincia").size(typography::BODY))
        .on_press(Message::Restart)
        .padding(spacing::SM)
        .style(styles::button::primary);

    Container::new(
        Column::new()
            .spacing(spacing::MD)
            .padding(spacing::MD)
            .align_x(Horizontal::Center)
            .push(summary)
            .push(restart),
    )
    .width(Length::Fill)
    .style(styles::container::card)
    .into()
}
