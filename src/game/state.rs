use super::clock::FrameTime;
use super::direction::Direction;
use super::geometry::Region;
use super::mode::GameMode;
use super::sim::Simulation;
use crate::command::Command;
use crate::consts;
use crate::input::FrameInput;
use crate::util::EnumExt;
use enum_dispatch::enum_dispatch;
use enum_map::EnumMap;
use log::info;
use rand::Rng;

/// Behavior shared by every screen of the game.  Each frame, input is
/// handled first; `update()` is only called if input did not already cause
/// a transition.
#[enum_dispatch]
pub(crate) trait Phase {
    fn handle_input<R: Rng>(
        &mut self,
        _sim: &mut Simulation<R>,
        _input: &FrameInput,
    ) -> Option<Transition> {
        None
    }

    fn update<R: Rng>(&mut self, _sim: &mut Simulation<R>, _time: FrameTime) -> Option<Transition> {
        None
    }
}

#[enum_dispatch(Phase)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum State {
    FrontPage,
    Menu,
    Countdown,
    Play,
    GameOver,
}

impl State {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            State::FrontPage(_) => "front page",
            State::Menu(_) => "menu",
            State::Countdown(_) => "countdown",
            State::Play(_) => "play",
            State::GameOver(_) => "game over",
        }
    }
}

impl Default for State {
    fn default() -> State {
        FrontPage::default().into()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Transition {
    To(State),
    Quit,
}

fn to_menu(mode: GameMode) -> Option<Transition> {
    Some(Transition::To(Menu::new(mode).into()))
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct FrontPage {
    start_hovered: bool,
    exit_hovered: bool,
}

impl FrontPage {
    pub(crate) fn start_hovered(&self) -> bool {
        self.start_hovered
    }

    pub(crate) fn exit_hovered(&self) -> bool {
        self.exit_hovered
    }
}

impl Phase for FrontPage {
    fn handle_input<R: Rng>(
        &mut self,
        sim: &mut Simulation<R>,
        input: &FrameInput,
    ) -> Option<Transition> {
        self.start_hovered = input.hovering(consts::START_BUTTON);
        self.exit_hovered = input.hovering(consts::EXIT_BUTTON);
        if input.clicked(consts::START_BUTTON)
            || input.pressed(Command::Enter)
            || input.pressed(Command::Space)
        {
            to_menu(sim.mode())
        } else if input.clicked(consts::EXIT_BUTTON) || input.pressed(Command::Esc) {
            Some(Transition::Quit)
        } else {
            None
        }
    }
}

/// The mode-selection screen
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Menu {
    highlighted: GameMode,
    hovered: EnumMap<GameMode, bool>,
}

impl Menu {
    pub(crate) fn new(highlighted: GameMode) -> Menu {
        Menu {
            highlighted,
            hovered: EnumMap::default(),
        }
    }

    pub(crate) fn highlighted(&self) -> GameMode {
        self.highlighted
    }

    pub(crate) fn hovered(&self, mode: GameMode) -> bool {
        self.hovered[mode]
    }

    /// The clickable area of the button for `mode`, in screen pixels
    pub(crate) fn button(mode: GameMode) -> Region {
        let row = match mode {
            GameMode::Classic => 0,
            GameMode::TimeAttack => 1,
            GameMode::Challenge => 2,
            GameMode::Infinite => 3,
        };
        Region::new(250, 250 + 70 * row, 300, 50)
    }
}

impl Phase for Menu {
    fn handle_input<R: Rng>(
        &mut self,
        _sim: &mut Simulation<R>,
        input: &FrameInput,
    ) -> Option<Transition> {
        for mode in GameMode::iter() {
            let button = Menu::button(mode);
            self.hovered[mode] = input.hovering(button);
            if input.clicked(button) {
                self.highlighted = mode;
                return Some(Transition::To(Countdown::new(mode).into()));
            }
        }
        if input.pressed(Command::Down) {
            self.highlighted = self.highlighted.cycle_next();
        } else if input.pressed(Command::Up) {
            self.highlighted = self.highlighted.cycle_prev();
        }
        if input.pressed(Command::Enter) || input.pressed(Command::Space) {
            Some(Transition::To(Countdown::new(self.highlighted).into()))
        } else if input.pressed(Command::Esc) {
            Some(Transition::To(FrontPage::default().into()))
        } else {
            None
        }
    }
}

/// The "Get Ready!" pause before a run begins
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Countdown {
    timer: f32,
    mode: GameMode,
}

impl Countdown {
    pub(crate) fn new(mode: GameMode) -> Countdown {
        Countdown {
            timer: consts::COUNTDOWN_DURATION,
            mode,
        }
    }

    pub(crate) fn mode(&self) -> GameMode {
        self.mode
    }

    /// Seconds left before play starts
    pub(crate) fn remaining(&self) -> f32 {
        self.timer
    }
}

impl Phase for Countdown {
    fn update<R: Rng>(&mut self, sim: &mut Simulation<R>, time: FrameTime) -> Option<Transition> {
        self.timer -= time.delta;
        if self.timer <= 0.0 {
            info!("Starting {} run", self.mode);
            sim.reset(self.mode);
            Some(Transition::To(Play.into()))
        } else {
            None
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Play;

impl Phase for Play {
    fn handle_input<R: Rng>(
        &mut self,
        sim: &mut Simulation<R>,
        input: &FrameInput,
    ) -> Option<Transition> {
        if input.pressed(Command::P) {
            sim.toggle_pause();
        }
        for (cmd, direction) in [
            (Command::Up, Direction::North),
            (Command::Down, Direction::South),
            (Command::Left, Direction::West),
            (Command::Right, Direction::East),
        ] {
            if input.held(cmd) {
                sim.turn(direction);
            }
        }
        if input.pressed(Command::Q) {
            to_menu(sim.mode())
        } else if input.pressed(Command::Esc) {
            Some(Transition::Quit)
        } else {
            None
        }
    }

    fn update<R: Rng>(&mut self, sim: &mut Simulation<R>, time: FrameTime) -> Option<Transition> {
        sim.update(time);
        if sim.ended() {
            info!("{} run over with score {}", sim.mode(), sim.score());
            Some(Transition::To(GameOver.into()))
        } else {
            None
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct GameOver;

impl Phase for GameOver {
    fn handle_input<R: Rng>(
        &mut self,
        sim: &mut Simulation<R>,
        input: &FrameInput,
    ) -> Option<Transition> {
        if input.pressed(Command::Enter) || input.pressed(Command::Space) || input.pressed(Command::Q)
        {
            to_menu(sim.mode())
        } else if input.pressed(Command::Esc) {
            Some(Transition::Quit)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::ARENA;
    use crate::game::geometry::Point;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use rstest::rstest;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    fn sim() -> Simulation<ChaCha12Rng> {
        Simulation::new(ARENA, ChaCha12Rng::seed_from_u64(RNG_SEED))
    }

    fn pressing(cmd: Command) -> FrameInput {
        let mut input = FrameInput::default();
        input.press(cmd);
        input
    }

    fn clicking(x: i32, y: i32) -> FrameInput {
        let mut input = FrameInput::default();
        input.click(Some(Point::new(x, y)));
        input
    }

    #[rstest]
    #[case(GameMode::Classic, 250)]
    #[case(GameMode::TimeAttack, 320)]
    #[case(GameMode::Challenge, 390)]
    #[case(GameMode::Infinite, 460)]
    fn menu_buttons(#[case] mode: GameMode, #[case] y: i32) {
        assert_eq!(Menu::button(mode), Region::new(250, y, 300, 50));
    }

    #[rstest]
    #[case(Command::Enter)]
    #[case(Command::Space)]
    fn front_page_keys_open_menu(#[case] cmd: Command) {
        let mut sim = sim();
        let mut page = FrontPage::default();
        assert_eq!(
            page.handle_input(&mut sim, &pressing(cmd)),
            Some(Transition::To(Menu::new(GameMode::Classic).into()))
        );
    }

    #[test]
    fn front_page_buttons() {
        let mut sim = sim();
        let mut page = FrontPage::default();
        assert_eq!(
            page.handle_input(&mut sim, &clicking(300, 500)),
            Some(Transition::To(Menu::new(GameMode::Classic).into()))
        );
        assert_eq!(
            page.handle_input(&mut sim, &clicking(500, 500)),
            Some(Transition::Quit)
        );
        assert_eq!(page.handle_input(&mut sim, &clicking(400, 500)), None);
        assert_eq!(
            page.handle_input(&mut sim, &pressing(Command::Esc)),
            Some(Transition::Quit)
        );
    }

    #[test]
    fn front_page_hover() {
        let mut sim = sim();
        let mut page = FrontPage::default();
        let mut input = FrameInput::default();
        input.move_pointer(Some(Point::new(215, 485)));
        assert_eq!(page.handle_input(&mut sim, &input), None);
        assert!(page.start_hovered());
        assert!(!page.exit_hovered());
    }

    #[test]
    fn menu_navigation_wraps() {
        let mut sim = sim();
        let mut menu = Menu::new(GameMode::Classic);
        assert_eq!(menu.handle_input(&mut sim, &pressing(Command::Up)), None);
        assert_eq!(menu.highlighted(), GameMode::Infinite);
        assert_eq!(menu.handle_input(&mut sim, &pressing(Command::Down)), None);
        assert_eq!(menu.highlighted(), GameMode::Classic);
        assert_eq!(menu.handle_input(&mut sim, &pressing(Command::Down)), None);
        assert_eq!(menu.highlighted(), GameMode::TimeAttack);
        assert_eq!(
            menu.handle_input(&mut sim, &pressing(Command::Enter)),
            Some(Transition::To(Countdown::new(GameMode::TimeAttack).into()))
        );
    }

    #[test]
    fn menu_click_starts_mode() {
        let mut sim = sim();
        let mut menu = Menu::new(GameMode::Classic);
        assert_eq!(
            menu.handle_input(&mut sim, &clicking(400, 400)),
            Some(Transition::To(Countdown::new(GameMode::Challenge).into()))
        );
        assert!(menu.hovered(GameMode::Challenge));
        assert!(!menu.hovered(GameMode::Classic));
        assert_eq!(menu.handle_input(&mut sim, &clicking(400, 305)), None);
    }

    #[test]
    fn menu_escape() {
        let mut sim = sim();
        let mut menu = Menu::new(GameMode::Infinite);
        assert_eq!(
            menu.handle_input(&mut sim, &pressing(Command::Esc)),
            Some(Transition::To(FrontPage::default().into()))
        );
    }

    #[test]
    fn countdown_then_play() {
        let mut sim = sim();
        let mut countdown = Countdown::new(GameMode::Infinite);
        let frame = FrameTime {
            delta: 1.0,
            now: 0.0,
        };
        assert_eq!(countdown.update(&mut sim, frame), None);
        assert_eq!(countdown.update(&mut sim, frame), None);
        assert_eq!(countdown.remaining(), 1.0);
        assert_eq!(countdown.update(&mut sim, frame), Some(Transition::To(Play.into())));
        assert_eq!(sim.mode(), GameMode::Infinite);
    }

    #[test]
    fn play_keys() {
        let mut sim = sim();
        sim.reset(GameMode::TimeAttack);
        let mut play = Play;
        assert_eq!(play.handle_input(&mut sim, &pressing(Command::P)), None);
        assert!(sim.paused);
        assert_eq!(play.handle_input(&mut sim, &pressing(Command::Down)), None);
        assert_eq!(sim.snake.direction(), Direction::East);
        assert_eq!(play.handle_input(&mut sim, &pressing(Command::P)), None);
        assert_eq!(play.handle_input(&mut sim, &pressing(Command::Down)), None);
        assert_eq!(sim.snake.direction(), Direction::South);
        assert_eq!(
            play.handle_input(&mut sim, &pressing(Command::Q)),
            Some(Transition::To(Menu::new(GameMode::TimeAttack).into()))
        );
        assert_eq!(
            play.handle_input(&mut sim, &pressing(Command::Esc)),
            Some(Transition::Quit)
        );
    }

    #[test]
    fn play_ends_when_time_runs_out() {
        let mut sim = sim();
        sim.reset(GameMode::TimeAttack);
        let mut play = Play;
        let frame = FrameTime {
            delta: 61.0,
            now: 0.0,
        };
        assert_eq!(play.update(&mut sim, frame), Some(Transition::To(GameOver.into())));
    }

    #[rstest]
    #[case(Command::Enter, Some(Transition::To(Menu::new(GameMode::Challenge).into())))]
    #[case(Command::Space, Some(Transition::To(Menu::new(GameMode::Challenge).into())))]
    #[case(Command::Q, Some(Transition::To(Menu::new(GameMode::Challenge).into())))]
    #[case(Command::Esc, Some(Transition::Quit))]
    #[case(Command::P, None)]
    fn game_over_keys(#[case] cmd: Command, #[case] transition: Option<Transition>) {
        let mut sim = sim();
        sim.reset(GameMode::Challenge);
        let mut over = GameOver;
        assert_eq!(over.handle_input(&mut sim, &pressing(cmd)), transition);
    }
}
