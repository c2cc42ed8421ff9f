use crate::render::ViewCellState;
use crate::session::GameSession;
use crate::utils::*;
use boxhunt_core as game;
use gloo::timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Time the finished board stays visible before the outcome is announced.
const REVEAL_DELAY_MS: u32 = 200;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Select(usize),
    Conclude,
    Reconfigure(String),
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    index: usize,
    cell_state: ViewCellState,
    #[prop_or_default]
    locked: bool,
    onselect: Callback<usize>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    use ViewCellState::*;

    let CellProps {
        index,
        cell_state,
        locked,
        onselect,
    } = props.clone();

    let (face, mut class) = match cell_state {
        Closed => ("?", classes!("box")),
        Winner => ("\u{2713}", classes!("box", "open", "winner")),
        Loser => ("\u{2717}", classes!("box", "open", "loser")),
    };
    if locked {
        class.push("locked");
    }

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("box {} clicked", index);
        onselect.emit(index);
    });

    html! {
        <button type="button" {class} {onclick}>{face}</button>
    }
}

#[derive(Properties, Clone, PartialEq)]
struct ScoreboardProps {
    score: game::Score,
}

#[function_component(ScoreboardView)]
fn scoreboard_component(props: &ScoreboardProps) -> Html {
    let game::Score { wins, losses } = props.score;

    html! {
        <nav class="scoreboard">
            <aside class="wins">{format!("Wins: {}", wins)}</aside>
            <aside class="losses">{format!("Losses: {}", losses)}</aside>
        </nav>
    }
}

#[derive(Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    pub box_count: usize,
    pub seed: u64,
}

pub(crate) struct GameView {
    session: GameSession<Timeout>,
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let GameProps { box_count, seed } = *ctx.props();
        Self {
            session: GameSession::new(box_count, seed),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Select(index) => {
                let link = ctx.link().clone();
                self.session.select(index, move || {
                    Timeout::new(REVEAL_DELAY_MS, move || link.send_message(Conclude))
                })
            }
            Conclude => self.session.conclude(&mut AlertNotifier),
            Reconfigure(raw) => self.session.reconfigure(&raw),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let board = self.session.board();
        let model = board.renderer();
        let is_playable = board.state().is_playing();
        let guesses_left = board.remaining_guesses();

        let onchange = ctx.link().callback(|e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::Reconfigure(input.value())
        });

        html! {
            <div class="boxhunt">
                <ScoreboardView score={model.score()}/>
                <div class={classes!(
                    "board",
                    is_playable.then_some("playable"),
                    self.session.is_concluding().then_some("concluding")
                )}>
                    {
                        for model.cells().iter().enumerate().map(|(index, &cell_state)| {
                            let onselect = ctx.link().callback(Msg::Select);
                            let locked = !is_playable || cell_state != ViewCellState::Closed;
                            html! {
                                <CellView {index} {cell_state} {locked} {onselect}/>
                            }
                        })
                    }
                </div>
                <footer>
                    <aside>{format!("Guesses left: {}", guesses_left)}</aside>
                    <label>
                        {"Boxes "}
                        <input
                            key={format!("boxes-{}", self.session.input_epoch())}
                            type="number"
                            min={game::MIN_BOX_COUNT.to_string()}
                            max={MAX_BOX_COUNT.to_string()}
                            value={board.pending_box_count().unwrap_or(board.box_count()).to_string()}
                            {onchange}
                        />
                    </label>
                </footer>
            </div>
        }
    }
}

